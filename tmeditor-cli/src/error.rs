//! Error handling for the CLI application

use std::fmt;

/// CLI specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Algorithm name not present in the menu
    UnknownAlgorithm(String),
    /// One or more expressions failed validation
    ValidationFailed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnknownAlgorithm(name) => write!(f, "No such algorithm: {name}"),
            CliError::ValidationFailed(count) => {
                write!(f, "Validation failed: {count} invalid expression(s)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("menu.toml".to_string());
        assert_eq!(error.to_string(), "File not found: menu.toml");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown format `xml`".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown format `xml`");
    }

    #[test]
    fn test_validation_errors_display() {
        assert_eq!(
            CliError::UnknownAlgorithm("L1_Missing".to_string()).to_string(),
            "No such algorithm: L1_Missing"
        );
        assert_eq!(
            CliError::ValidationFailed(2).to_string(),
            "Validation failed: 2 invalid expression(s)"
        );
    }

    #[test]
    fn test_error_converts_to_anyhow() {
        let failure: CliResult<()> = Err(CliError::ValidationFailed(1).into());
        let error = failure.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::ValidationFailed(1))
        ));
    }
}
