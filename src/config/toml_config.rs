use crate::adapters::{FixedClock, SystemClock, UsLocale};
use crate::domain::model::TimeZoneChoice;
use crate::domain::ports::Clock;
use crate::utils::error::{RentalError, Result};
use crate::utils::validation::{validate_iso_date, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_LOCALES: &[&str] = &["en-US"];
pub const SUPPORTED_CURRENCIES: &[&str] = &["USD"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: LocaleConfig,
    pub clock: ClockConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub locale: String,
    pub currency: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            currency: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub time_zone: TimeZoneChoice,
    /// Pins "today" instead of reading the system clock.
    pub today: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl AppConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RentalError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn locale_formatter(&self) -> UsLocale {
        UsLocale::new(self.clock.time_zone)
    }

    pub fn clock(&self) -> Result<Box<dyn Clock>> {
        match &self.clock.today {
            Some(today) => Ok(Box::new(FixedClock(validate_iso_date("clock.today", today)?))),
            None => Ok(Box::new(SystemClock::new(self.clock.time_zone))),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("locale.locale", &self.locale.locale, SUPPORTED_LOCALES)?;
        validate_one_of("locale.currency", &self.locale.currency, SUPPORTED_CURRENCIES)?;
        if let Some(today) = &self.clock.today {
            validate_iso_date("clock.today", today)?;
        }
        Ok(())
    }
}
