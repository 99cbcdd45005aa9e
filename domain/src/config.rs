//! Dashboard configuration.
//!
//! Every field has a default, so an empty YAML document is a valid config.

use serde::{Deserialize, Serialize};
use shared::MoneyManagementConfig;
use thiserror::Error;

use crate::mock_data::SYSTEM_INSTRUCTION;
use crate::prediction_service::DEFAULT_DAILY_TARGET;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse dashboard config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub api_base: String,
    pub model: String,
    /// Left empty in the checked-in config; supplied at build time
    pub api_key: Option<String>,
    pub system_instruction: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub currency_symbol: String,
    pub log_level: String,
    pub platform_connect_delay_ms: u32,
    pub daily_target: f64,
    pub chat: ChatConfig,
    pub money: MoneyManagementConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            log_level: "info".to_string(),
            platform_connect_delay_ms: 2000,
            daily_target: DEFAULT_DAILY_TARGET,
            chat: ChatConfig::default(),
            money: MoneyManagementConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: DashboardConfig = serde_yaml::from_str(source)?;
        config.log_level_filter()?;
        // The top-level symbol is the only one read from the file
        config.money.currency_symbol = config.currency_symbol.clone();
        Ok(config)
    }

    /// Replace the API key when one is given and non-blank
    pub fn with_api_key(mut self, api_key: Option<&str>) -> Self {
        if let Some(key) = api_key.map(str::trim).filter(|key| !key.is_empty()) {
            self.chat.api_key = Some(key.to_string());
        }
        self
    }

    pub fn log_level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = DashboardConfig::from_yaml_str("").unwrap();

        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.platform_connect_delay_ms, 2000);
        assert_eq!(config.daily_target, 2000.0);
        assert_eq!(config.chat.model, DEFAULT_MODEL);
        assert!(config.chat.api_key.is_none());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let yaml = r#"
log_level: debug
chat:
  model: gemini-2.0-flash
money:
  max_amount: 5000
"#;
        let config = DashboardConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.log_level_filter().unwrap(), log::LevelFilter::Debug);
        assert_eq!(config.chat.model, "gemini-2.0-flash");
        assert_eq!(config.chat.api_base, DEFAULT_API_BASE);
        assert_eq!(config.money.max_amount, 5000.0);
        assert_eq!(config.money.currency_symbol, "₹");
    }

    #[test]
    fn test_currency_symbol_applies_to_money_forms() {
        let yaml = r#"
currency_symbol: "Rs."
money:
  currency_symbol: "$"
"#;
        let config = DashboardConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.currency_symbol, "Rs.");
        assert_eq!(config.money.currency_symbol, "Rs.");
    }

    #[test]
    fn test_invalid_documents_are_rejected() {
        assert!(matches!(
            DashboardConfig::from_yaml_str("daily_target: lots"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DashboardConfig::from_yaml_str("log_level: loud"),
            Err(ConfigError::UnknownLogLevel(_))
        ));
    }

    #[test]
    fn test_api_key_overlay_ignores_blank_values() {
        let config = DashboardConfig::default().with_api_key(Some("   "));
        assert!(config.chat.api_key.is_none());

        let config = config.with_api_key(Some(" abc123 "));
        assert_eq!(config.chat.api_key.as_deref(), Some("abc123"));

        let config = config.with_api_key(None);
        assert_eq!(config.chat.api_key.as_deref(), Some("abc123"));
    }
}
