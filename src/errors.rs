use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contact book file is corrupted: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid command '{0}'. Type 'help' for available commands.")]
    ParseCommand(String),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Enter the argument for the command. Usage: {0}")]
    Argument(String),

    #[error("{0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_parse_int_error_message() {
        let wrong_string = "abc".parse::<i64>().unwrap_err();
        let err = AppError::ParseInt(wrong_string);

        assert!(format!("{}", err).contains("Invalid number format: "));
    }

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact 'Alice'".to_string());

        assert_eq!(err.to_string(), "Contact 'Alice' not found");
    }

    #[test]
    fn confirm_argument_error_carries_usage() {
        let err = AppError::Argument("add <name> [phone]".to_string());

        assert_eq!(
            err.to_string(),
            "Enter the argument for the command. Usage: add <name> [phone]"
        );
    }
}
