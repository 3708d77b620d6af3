use super::{
    command::{Cli, Command},
    handlers::{GOODBYE, SessionContext, dispatch},
};
use crate::domain::ContactStore;
use crate::errors::AppError;
use crate::store::parse_storage_type;
use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let storage = parse_storage_type(cli.storage_choice, &cli.storage_path);
    let mut book = storage.load()?;

    info!(
        medium = storage.get_medium(),
        contacts = book.len(),
        "assistant started"
    );

    let stdin = io::stdin();
    run_session(
        &mut book,
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
        cli.window,
    )?;

    storage.save(&book)
}

/// Reads commands line by line until `close`/`exit` or end of input. Replies go to
/// `out`, failed commands are reported on `err` and the session carries on.
pub fn run_session<R, W, E>(
    book: &mut ContactStore,
    mut input: R,
    out: &mut W,
    err: &mut E,
    window_days: i64,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(out, "Welcome to the assistant bot!")?;

    let mut buf = Vec::new();
    loop {
        write!(out, "Enter a command: ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out, "\n{GOODBYE}")?;
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            let e = AppError::Validation("Input is not valid UTF-8 text".to_string());
            debug!(error = %e, "could not decode input line");
            writeln!(err, "{e}")?;
            continue;
        };

        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                debug!(input = %line.trim_end(), error = %e, "could not parse command");
                writeln!(err, "{e}")?;
                continue;
            }
        };

        let quit = command == Command::Exit;

        debug!(?command, "dispatching");
        let ctx = SessionContext {
            today: Local::now().date_naive(),
            window_days,
        };

        match dispatch(command, book, &ctx) {
            Ok(reply) => writeln!(out, "{reply}")?,
            Err(e) => {
                debug!(error = %e, "command failed");
                writeln!(err, "{e}")?;
            }
        }

        if quit {
            break;
        }
    }

    Ok(())
}
