use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid date: '{value}'")]
    InvalidDate { value: String },

    #[error("Invalid amount for {field}: {value}")]
    InvalidAmount { field: String, value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Page fixture error: {message}")]
    PageError { message: String },
}

impl RentalError {
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// Short message suitable for printing to a terminal user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not encode output: {}", e),
            Self::TomlError(e) => format!("The TOML file is not valid: {}", e),
            Self::InvalidDate { value } => format!("'{}' is not a valid date", value),
            Self::InvalidAmount { field, value } => {
                format!("'{}' is not a valid amount for {}", value, field)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::PageError { message } => format!("Page fixture problem: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the path exists and is readable",
            Self::SerializationError(_) => "Report this as a bug, output encoding should not fail",
            Self::TomlError(_) => "Fix the TOML syntax at the reported line",
            Self::InvalidDate { .. } => "Use the YYYY-MM-DD format, e.g. 2024-01-05",
            Self::InvalidAmount { .. } => "Use a finite, non-negative number such as 49.99",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the configuration file against the documented settings"
            }
            Self::PageError { .. } => "Make sure every form and input in the page file has a name",
        }
    }
}

pub type Result<T> = std::result::Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_messages() {
        let err = RentalError::invalid_date("2024-13-01");
        assert_eq!(err.to_string(), "Invalid date: '2024-13-01'");
        assert!(err.user_friendly_message().contains("2024-13-01"));
        assert!(err.recovery_suggestion().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_toml_error_converts() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("a = ");
        let err: RentalError = parsed.unwrap_err().into();
        assert!(matches!(err, RentalError::TomlError(_)));
    }
}
