//! API configuration, aggregated from the shared config sections

use serde::{Deserialize, Serialize};
use shop_shared::config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from the process environment (after `.env` has been read)
    pub fn from_env() -> Self {
        Self::from(AppConfig::from_env())
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}

impl From<AppConfig> for Config {
    fn from(app: AppConfig) -> Self {
        Self {
            environment: app.environment,
            server: app.server,
            database: app.database,
            auth: app.auth,
            cors: app.cors,
            logging: app.logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_development_defaults() {
        let config = Config::from(AppConfig::development());
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.bind_address(), "127.0.0.1:3055");
        assert!(config.cors.allows_any_origin());
    }
}
