use anyhow::{anyhow, Result};
use civicdb_core::lifecycle::LifecycleRules;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "civicdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub lifecycle: LifecycleRules,
    pub sweep: Sweep,
    pub cron: Cron,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Sweep {
    /// Disabled if not set.
    pub task_interval_time: Option<Duration>,
}

pub struct Cron {
    pub secret: Option<String>,
}

fn signed_duration(duration: Duration, name: &str) -> Result<time::Duration> {
    time::Duration::try_from(duration).map_err(|_| anyhow!("Invalid duration of '{name}'"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            lifecycle,
            sweep,
            cron,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must be positive"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Lifecycle {
            report_vote_threshold,
            drive_vote_threshold,
            voting_window,
            escalation_after,
        } = lifecycle.unwrap_or_default();

        if report_vote_threshold == 0 || drive_vote_threshold == 0 {
            return Err(anyhow!("Vote thresholds must be positive"));
        }
        let lifecycle = LifecycleRules {
            report_vote_threshold,
            drive_vote_threshold,
            voting_window: signed_duration(voting_window, "voting-window")?,
            escalation_after: signed_duration(escalation_after, "escalation-after")?,
        };

        let raw::Sweep { task_interval_time } = sweep.unwrap_or_default();
        if task_interval_time.is_some_and(|t| t.is_zero()) {
            return Err(anyhow!("The sweep interval must be positive"));
        }
        let sweep = Sweep { task_interval_time };

        let raw::Cron { secret } = cron.unwrap_or_default();
        let cron = Cron {
            secret: secret.filter(|s| !s.trim().is_empty()),
        };

        Ok(Self {
            db,
            webserver,
            lifecycle,
            sweep,
            cron,
        })
    }
}
