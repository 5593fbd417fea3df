use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `SCOREKEEP_PORT=8080`
pub const ENV_PREFIX: &str = "SCOREKEEP";

/// Config file read when none is named on the command line
pub const DEFAULT_CONFIG_FILE: &str = "scorekeep.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub history_path: PathBuf,
    pub log_profile: String,
}

impl ServerConfig {
    /// Load configuration, later sources overriding earlier ones:
    /// built-in defaults, the TOML file at `file` (optional), then
    /// `SCOREKEEP_*` environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file is malformed or a value has the
    /// wrong type.
    pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 5000)?
            .set_default("history_path", "game_history.json")?
            .set_default("log_profile", "development")?
            .add_source(
                config::File::from(file)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
