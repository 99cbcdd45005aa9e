use anyhow::Context;
use steady_domain::DashboardConfig;

const EMBEDDED_CONFIG: &str = include_str!("../../dashboard.yaml");

/// Load the embedded dashboard config and apply the build-time API key
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    parse_config(EMBEDDED_CONFIG, option_env!("GEMINI_API_KEY"))
}

fn parse_config(source: &str, api_key: Option<&str>) -> anyhow::Result<DashboardConfig> {
    let config = DashboardConfig::from_yaml_str(source).context("Invalid dashboard.yaml")?;
    Ok(config.with_api_key(api_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = parse_config(EMBEDDED_CONFIG, None).unwrap();
        assert_eq!(config.platform_connect_delay_ms, 2000);
        assert_eq!(config.money.currency_symbol, "₹");
    }

    #[test]
    fn test_api_key_overlay() {
        let config = parse_config(EMBEDDED_CONFIG, Some("test-key")).unwrap();
        assert_eq!(config.chat.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_bad_config_has_context() {
        let err = parse_config("daily_target: [", None).unwrap_err();
        assert!(err.to_string().contains("dashboard.yaml"));
    }
}
