use crate::domain::DEFAULT_WINDOW_DAYS;
use crate::errors::AppError;
use crate::store::{StorageMedium, json::STORAGE_PATH};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rolodex-assistant",
    version,
    about = "Contact book assistant with birthday reminders"
)]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", value_enum, default_value_t = StorageMedium::Json)]
    pub storage_choice: StorageMedium,

    /// Location of the contact book file
    #[arg(long, env = "CONTACTS_STORAGE_PATH", default_value_t = String::from(STORAGE_PATH))]
    pub storage_path: String,

    /// How many days ahead `birthdays` looks when no count is given
    #[arg(long, env = "BIRTHDAY_WINDOW", default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window: i64,
}

/// Every command the assistant understands, as typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: Option<String>,
    },
    /// Without `old_phone` the first saved phone is replaced
    Change {
        name: String,
        old_phone: Option<String>,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Delete {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays {
        days: Option<i64>,
    },
    Help,
    Exit,
}

/// (usage, description) for `help`, in display order.
pub const COMMAND_USAGE: &[(&str, &str)] = &[
    ("hello", "Greet the assistant"),
    ("add <name> [phone]", "Add a contact or a phone to an existing one"),
    ("change <name> [old] <new>", "Replace a phone (the first one if old is omitted)"),
    ("phone <name>", "Show the phones of a contact"),
    ("remove-phone <name> <phone>", "Remove a phone from a contact"),
    ("delete <name>", "Delete a contact"),
    ("all", "Show every contact"),
    ("add-birthday <name> <DD.MM.YYYY>", "Set the birthday of a contact"),
    ("show-birthday <name>", "Show the birthday of a contact"),
    ("birthdays [days]", "Show birthdays coming up"),
    ("help", "Show this list"),
    ("close | exit", "Save and quit"),
];

impl Command {
    /// Parses one input line. Blank lines give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, AppError> {
        let mut words = line.split_whitespace();

        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<String> = words.map(str::to_string).collect();

        let command = match word.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, rest @ ..] = args.as_slice() else {
                    return Err(usage("add"));
                };
                Command::Add {
                    name: name.clone(),
                    phone: rest.first().cloned(),
                }
            }
            "change" => match args.as_slice() {
                [name, old, new, ..] => Command::Change {
                    name: name.clone(),
                    old_phone: Some(old.clone()),
                    new_phone: new.clone(),
                },
                [name, new] => Command::Change {
                    name: name.clone(),
                    old_phone: None,
                    new_phone: new.clone(),
                },
                _ => return Err(usage("change")),
            },
            "phone" => Command::Phone {
                name: first_arg(&args, "phone")?,
            },
            "remove-phone" => {
                let [name, phone, ..] = args.as_slice() else {
                    return Err(usage("remove-phone"));
                };
                Command::RemovePhone {
                    name: name.clone(),
                    phone: phone.clone(),
                }
            }
            "delete" => Command::Delete {
                name: first_arg(&args, "delete")?,
            },
            "all" => Command::All,
            "add-birthday" => {
                // The date is the last word, anything between is ignored
                let [name, .., birthday] = args.as_slice() else {
                    return Err(usage("add-birthday"));
                };
                Command::AddBirthday {
                    name: name.clone(),
                    birthday: birthday.clone(),
                }
            }
            "show-birthday" => Command::ShowBirthday {
                name: first_arg(&args, "show-birthday")?,
            },
            "birthdays" => {
                let days = match args.first() {
                    Some(days) => {
                        let days = days.parse::<i64>()?;
                        if days < 0 {
                            return Err(AppError::Validation(
                                "Number of days must not be negative".to_string(),
                            ));
                        }
                        Some(days)
                    }
                    None => None,
                };
                Command::Birthdays { days }
            }
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            _ => return Err(AppError::ParseCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

fn first_arg(args: &[String], command: &str) -> Result<String, AppError> {
    args.first().cloned().ok_or_else(|| usage(command))
}

fn usage(command: &str) -> AppError {
    let line = COMMAND_USAGE
        .iter()
        .find(|(usage, _)| usage.split_whitespace().next() == Some(command))
        .map(|(usage, _)| usage.to_string())
        .unwrap_or_else(|| command.to_string());
    AppError::Argument(line)
}
