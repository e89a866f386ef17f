use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory the file-backed store writes snapshots under.
    pub data_dir: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("storage.data_dir", "data")?
            // Optional configuration files, most specific last
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SAVORA_STORAGE__DATA_DIR=/tmp/savora`
            .add_source(config::Environment::with_prefix("SAVORA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
