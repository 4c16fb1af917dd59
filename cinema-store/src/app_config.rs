use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub movies_file: String,
    pub bookings_file: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Code defaults so the service runs with no config files at all
            .set_default("server.port", 3000_i64)?
            .set_default("server.request_timeout_seconds", 5_i64)?
            .set_default("storage.movies_file", "movies.json")?
            .set_default("storage.bookings_file", "bookings.json")?
            // Optional file layers, per-environment on top of default
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Env overrides, e.g. CINEMA__SERVER__PORT=8080
            .add_source(config::Environment::with_prefix("CINEMA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
