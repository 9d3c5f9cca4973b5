use duration_str::{deserialize_duration, deserialize_option_duration};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("civicdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub lifecycle: Option<Lifecycle>,
    pub sweep: Option<Sweep>,
    pub cron: Option<Cron>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Lifecycle {
    pub report_vote_threshold: u32,
    pub drive_vote_threshold: u32,
    #[serde(deserialize_with = "deserialize_duration")]
    pub voting_window: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub escalation_after: Duration,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Config::default()
            .lifecycle
            .expect("Lifecycle configuration")
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Sweep {
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub task_interval_time: Option<Duration>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Cron {
    pub secret: Option<String>,
}
