use crate::presentation::config::Environment;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let environment = std::env::var("APP_ENV")
            .ok()
            .and_then(|value| Environment::try_from(value).ok())
            .unwrap_or(Environment::Local);

        let json_format = match std::env::var("LOG_FORMAT") {
            Ok(value) => value.to_lowercase() == "json",
            Err(_) => environment == Environment::Prod,
        };

        Self {
            environment,
            json_format,
        }
    }
}
