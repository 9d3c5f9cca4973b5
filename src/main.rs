use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use civicdb_core::entities::{EmailAddress, Role};
use civicdb_db_sqlite::Connections;
use std::path::PathBuf;

mod config;
mod sweep;

/// Backend for reporting civic issues and organizing volunteer drives.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Escalate stale pending reports once and exit
    Sweep,
    /// Assign a role to a registered user and exit
    ///
    /// This is the only way to create the first admin.
    Role {
        /// E-Mail address of the user
        email: String,
        #[arg(value_enum)]
        role: RoleArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Guest,
    User,
    Moderator,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(from: RoleArg) -> Self {
        match from {
            RoleArg::Guest => Self::Guest,
            RoleArg::User => Self::User,
            RoleArg::Moderator => Self::Moderator,
            RoleArg::Admin => Self::Admin,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;

    log::info!("Running embedded database migrations");
    civicdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command {
        Some(Command::Sweep) => {
            let count =
                civicdb_application::prelude::escalate_reports(&connections, &cfg.lifecycle)?;
            log::info!("Escalated {count} stale report(s)");
            return Ok(());
        }
        Some(Command::Role { email, role }) => {
            let email: EmailAddress = email.parse()?;
            let user =
                civicdb_application::prelude::assign_user_role(&connections, &email, role.into())?;
            log::info!("User {} ({}) is now {:?}", user.id, user.email, user.role);
            return Ok(());
        }
        None => {}
    }

    if let Some(interval) = cfg.sweep.task_interval_time {
        tokio::spawn(sweep::run(connections.clone(), cfg.lifecycle, interval));
    } else {
        log::info!("In-process sweep is disabled");
    }

    let web_cfg = civicdb_webserver::Cfg {
        lifecycle: cfg.lifecycle,
        cron_secret: cfg.cron.secret,
    };
    let enable_cors = args.enable_cors || cfg.webserver.enable_cors;
    civicdb_webserver::run(connections, enable_cors, web_cfg, env!("CARGO_PKG_VERSION")).await;
    Ok(())
}
