//! Daemon settings: optional `persons.toml`, then `PERSONS_*` variables.
//!
//! `PERSONS_BIND` (`host:port`) is applied after `PERSONS_HOST` and
//! `PERSONS_PORT`. `RUST_LOG` wins over `PERSONS_LOG`.

use serde::Deserialize;

/// Everything `personsd` needs before it can serve.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listener address.
    pub server: ServerConfig,
    /// Person store.
    pub database: DatabaseConfig,
    /// `tracing` filter.
    pub logging: LoggingConfig,
}

/// `[server]` table.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to listen on. Defaults to all interfaces.
    pub host: String,
    /// Defaults to 8080. Zero is rejected.
    pub port: u16,
}

/// `[database]` table.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlx` `SQLite` URL of the person database.
    pub url: String,
}

/// `[logging]` table.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `personsd=debug`.
    pub filter: String,
}

impl Config {
    /// Read `persons.toml` from the working directory when it exists, then
    /// layer the environment on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unreadable or malformed file, or a
    /// zero port.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("persons.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("PERSONS_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("PERSONS_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Some(val) = lookup("PERSONS_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("PERSONS_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = lookup("PERSONS_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// `host:port` for the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// URL handed to the storage adapter.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:persons.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "personsd=info,persons=info,tower_http=debug".to_string(),
        }
    }
}

/// Why the daemon could not read its settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
