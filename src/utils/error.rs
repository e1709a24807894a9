use thiserror::Error;

#[derive(Error, Debug)]
pub enum RealtyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {field} = {value} is outside its admissible range")]
    ValidationError { field: String, value: String },

    #[error("Cannot estimate a price without at least one training record")]
    EmptyTrainingSet,

    #[error("Training record has no price")]
    MissingPrice,

    #[error("Input stream closed before any training record was entered")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RealtyError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RealtyError::ConfigError { .. } | RealtyError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            RealtyError::InputClosed => ErrorSeverity::Medium,
            _ => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RealtyError::IoError(e) => format!("Terminal I/O failed: {}", e),
            RealtyError::ConfigError { message } => format!("Bad configuration: {}", message),
            RealtyError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad configuration value for '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RealtyError::IoError(_) => "Check that standard input and output are available",
            RealtyError::ConfigError { .. } | RealtyError::InvalidConfigValueError { .. } => {
                "Fix the bounds file or run without --bounds to use the built-in ranges"
            }
            RealtyError::InputClosed => "Enter at least one training record before closing input",
            RealtyError::ValidationError { .. } => "Re-enter the record with values inside the admissible ranges",
            RealtyError::EmptyTrainingSet | RealtyError::MissingPrice => {
                "Collect priced training records before requesting an estimate"
            }
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RealtyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let config = RealtyError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
        assert_eq!(RealtyError::InputClosed.exit_code(), 2);
        assert_eq!(RealtyError::EmptyTrainingSet.exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message() {
        let err = RealtyError::InvalidConfigValueError {
            field: "area".to_string(),
            value: "[5, 1]".to_string(),
            reason: "min must not exceed max".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Bad configuration value for 'area': min must not exceed max"
        );
    }
}
