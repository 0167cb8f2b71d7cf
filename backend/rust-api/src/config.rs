use serde::Deserialize;
use std::env;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1";
pub const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-3-flash-preview";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub gateway: GatewayConfig,
    pub metrics_auth: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub url: String,
    pub model: String,
    /// Bearer secret for the completion gateway. `None` keeps the service up
    /// but every tutoring request fails with a config error.
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_GATEWAY_MODEL.to_string(),
            api_key: None,
            max_tokens: 1024,
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Override with environment variables (prefix: APP_)
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Self::from_settings(&settings)
    }

    /// Resolves every key from the layered settings first, then from the plain
    /// environment variable, then from the built-in default.
    pub fn from_settings(settings: &config::Config) -> Result<Self, config::ConfigError> {
        let defaults = GatewayConfig::default();

        let bind_addr = settings
            .get_string("server.bind_addr")
            .or_else(|_| env::var("BIND_ADDR"))
            .unwrap_or_else(|_| "0.0.0.0:8081".to_string());

        let url = settings
            .get_string("gateway.url")
            .or_else(|_| env::var("AI_GATEWAY_URL"))
            .unwrap_or(defaults.url)
            .trim()
            .trim_end_matches('/')
            .to_string();

        let model = settings
            .get_string("gateway.model")
            .or_else(|_| env::var("AI_GATEWAY_MODEL"))
            .unwrap_or(defaults.model);

        let api_key = settings
            .get_string("gateway.api_key")
            .or_else(|_| env::var("AI_GATEWAY_API_KEY"))
            .or_else(|_| env::var("LOVABLE_API_KEY"))
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if api_key.is_none() {
            tracing::warn!("AI gateway API key is not configured; tutoring requests will fail");
        }

        let max_tokens = match settings.get_int("gateway.max_tokens") {
            Ok(value) => u32::try_from(value).map_err(|_| {
                config::ConfigError::Message(format!("gateway.max_tokens out of range: {value}"))
            })?,
            Err(_) => defaults.max_tokens,
        };

        let temperature = settings
            .get_float("gateway.temperature")
            .map(|value| value as f32)
            .unwrap_or(defaults.temperature);
        if !(0.0..=2.0).contains(&temperature) {
            return Err(config::ConfigError::Message(format!(
                "gateway.temperature must be within 0.0..=2.0, got {temperature}"
            )));
        }

        let timeout_secs = match settings.get_int("gateway.timeout_secs") {
            Ok(value) if value > 0 => value as u64,
            Ok(value) => {
                return Err(config::ConfigError::Message(format!(
                    "gateway.timeout_secs must be positive, got {value}"
                )))
            }
            Err(_) => defaults.timeout_secs,
        };

        let metrics_auth = settings
            .get_string("metrics.auth")
            .or_else(|_| env::var("METRICS_AUTH"))
            .unwrap_or_else(|_| {
                if env::var("APP_ENV").as_deref() == Ok("prod") {
                    tracing::warn!("METRICS_AUTH is not set in production, using default");
                }
                "admin:changeme".to_string()
            });

        Ok(Config {
            bind_addr,
            gateway: GatewayConfig {
                url,
                model,
                api_key,
                max_tokens,
                temperature,
                timeout_secs,
            },
            metrics_auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BIND_ADDR",
            "AI_GATEWAY_URL",
            "AI_GATEWAY_MODEL",
            "AI_GATEWAY_API_KEY",
            "LOVABLE_API_KEY",
            "METRICS_AUTH",
        ] {
            env::remove_var(key);
        }
    }

    fn empty_settings() -> config::Config {
        config::Config::builder().build().unwrap()
    }

    #[test]
    #[serial]
    fn test_defaults_without_any_source() {
        clear_env();
        let config = Config::from_settings(&empty_settings()).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8081");
        assert_eq!(config.gateway.url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.gateway.model, DEFAULT_GATEWAY_MODEL);
        assert!(config.gateway.api_key.is_none());
        assert_eq!(config.gateway.max_tokens, 1024);
        assert!((config.gateway.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.metrics_auth, "admin:changeme");
    }

    #[test]
    #[serial]
    fn test_env_fallbacks() {
        clear_env();
        env::set_var("LOVABLE_API_KEY", "  secret-key  ");
        env::set_var("AI_GATEWAY_URL", "http://localhost:9999/v1/");

        let config = Config::from_settings(&empty_settings()).unwrap();
        assert_eq!(config.gateway.api_key.as_deref(), Some("secret-key"));
        assert_eq!(config.gateway.url, "http://localhost:9999/v1");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_treated_as_missing() {
        clear_env();
        env::set_var("AI_GATEWAY_API_KEY", "   ");

        let config = Config::from_settings(&empty_settings()).unwrap();
        assert!(config.gateway.api_key.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_settings_take_precedence_over_env() {
        clear_env();
        env::set_var("AI_GATEWAY_MODEL", "from-env");

        let settings = config::Config::builder()
            .set_override("gateway.model", "from-settings")
            .unwrap()
            .set_override("gateway.max_tokens", 256)
            .unwrap()
            .build()
            .unwrap();

        let config = Config::from_settings(&settings).unwrap();
        assert_eq!(config.gateway.model, "from-settings");
        assert_eq!(config.gateway.max_tokens, 256);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_rejects_out_of_range_temperature() {
        clear_env();
        let settings = config::Config::builder()
            .set_override("gateway.temperature", 3.5)
            .unwrap()
            .build()
            .unwrap();

        assert!(Config::from_settings(&settings).is_err());
    }
}
