use crate::error::{to_env_var, ConfigError};
use config::{Config, Environment};
use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or(ConfigError::InvalidAddress { addr })
    }
}

#[derive(Debug, Deserialize)]
pub struct TodoSettings {
    /// Start with the sample todos instead of an empty list
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for TodoSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TemplateSettings {
    /// Directory whose template files replace the builtin ones
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub todos: TodoSettings,
    #[serde(default)]
    pub templates: TemplateSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("todos.seed", default_seed())?
            // Layer on the environment variables
            .add_source(
                Environment::with_prefix("TODOCHAT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let result: Result<Self, config::ConfigError> = config.try_deserialize();

        match result {
            Ok(settings) => Ok(settings),
            Err(err) => {
                tracing::debug!("Configuration error: {:?}", &err);

                // Point at the variable when config knows which key was bad
                let env_var = match &err {
                    config::ConfigError::Type { key: Some(key), .. } => Some(to_env_var(key)),
                    _ => None,
                };
                match env_var {
                    Some(env_var) => Err(ConfigError::InvalidEnvVar {
                        env_var,
                        message: err.to_string(),
                    }),
                    None => Err(ConfigError::Other(err)),
                }
            }
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_seed() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clean_env() {
        for (key, _) in env::vars() {
            if key.starts_with("TODOCHAT_") {
                env::remove_var(&key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_settings() {
        clean_env();

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert!(settings.todos.seed);
        assert_eq!(settings.templates.dir, None);
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        clean_env();
        env::set_var("TODOCHAT_SERVER__HOST", "0.0.0.0");
        env::set_var("TODOCHAT_SERVER__PORT", "8080");
        env::set_var("TODOCHAT_TODOS__SEED", "false");
        env::set_var("TODOCHAT_TEMPLATES__DIR", "/srv/todochat/templates");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert!(!settings.todos.seed);
        assert_eq!(
            settings.templates.dir,
            Some(PathBuf::from("/srv/todochat/templates"))
        );

        // Clean up
        clean_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clean_env();
        env::set_var("TODOCHAT_SERVER__PORT", "not-a-port");

        match Settings::new() {
            Err(ConfigError::InvalidEnvVar { env_var, .. }) => {
                assert_eq!(env_var, "TODOCHAT_SERVER__PORT")
            }
            other => panic!("Expected InvalidEnvVar, got {:?}", other),
        }

        clean_env();
    }

    #[test]
    #[serial]
    fn test_invalid_seed_flag() {
        clean_env();
        env::set_var("TODOCHAT_TODOS__SEED", "maybe");

        match Settings::new() {
            Err(ConfigError::InvalidEnvVar { env_var, .. }) => {
                assert_eq!(env_var, "TODOCHAT_TODOS__SEED")
            }
            other => panic!("Expected InvalidEnvVar, got {:?}", other),
        }

        clean_env();
    }

    #[test]
    fn test_socket_addr_conversion() {
        let server_settings = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        let addr = server_settings.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }
}
