use log::LevelFilter;

/// Build-time settings, taken from the environment of the `trunk build`
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for backend requests; empty means same origin
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// Development token for running the shell without the login flow
    pub dev_jwt_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("LOCATION_API_BASE_URL"),
            option_env!("LOCATION_LOG_LEVEL"),
            option_env!("LOCATION_DEV_JWT_TOKEN"),
        )
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>, dev_jwt_token: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url.unwrap_or_default().to_string(),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(LevelFilter::Info),
            dev_jwt_token: dev_jwt_token.map(str::to_string),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.dev_jwt_token, None);
    }

    #[test]
    fn test_values_are_read() {
        let config = AppConfig::from_values(Some("http://localhost:8080"), Some("debug"), Some("dev-token"));
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.dev_jwt_token.as_deref(), Some("dev-token"));
    }

    #[test]
    fn test_bad_log_level_falls_back_to_info() {
        let config = AppConfig::from_values(None, Some("loud"), None);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
