use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub payouts: PayoutConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayoutConfig {
    /// Providers sleep for their simulated network latency when true
    pub simulate_latency: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `text` or `json`
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                environment: "development".to_string(),
            },
            payouts: PayoutConfig {
                simulate_latency: true,
            },
            logging: LoggingConfig {
                format: "text".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        };

        let payouts = PayoutConfig {
            simulate_latency: env::var("SIMULATE_LATENCY")
                .unwrap_or_else(|_| "true".to_string())
                .trim()
                .to_lowercase()
                .parse()
                .context("SIMULATE_LATENCY must be true or false")?,
        };

        let logging = LoggingConfig {
            format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "text".to_string())
                .trim()
                .to_lowercase(),
        };

        let config = Config {
            server,
            payouts,
            logging,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port < 1024 {
            return Err(anyhow!(
                "Port must be at least 1024, got {}",
                self.server.port
            ));
        }

        let valid_environments = ["development", "staging", "production"];
        if !valid_environments.contains(&self.server.environment.as_str()) {
            return Err(anyhow!(
                "Environment must be one of: {:?}, got {}",
                valid_environments,
                self.server.environment
            ));
        }

        if self.server.host.trim().is_empty() {
            return Err(anyhow!("HOST cannot be empty"));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow!(
                "LOG_FORMAT must be 'text' or 'json', got {}",
                self.logging.format
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_privileged_port_rejected() {
        let mut config = Config::default();
        config.server.port = 80;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_environment_rejected() {
        let mut config = Config::default();
        config.server.environment = "qa".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("qa"));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
