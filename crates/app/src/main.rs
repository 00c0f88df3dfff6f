use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;
use server::{AppState, ServerConfig, config};
use services::{AppServices, Clock};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};

#[derive(Debug)]
enum ArgsError {
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Career roadmap tracker API server.
#[derive(Debug, Parser)]
#[command(name = "careerlaunch", version)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Interface to bind.
    #[arg(long, env = "CAREER_HOST", default_value = config::DEFAULT_HOST)]
    host: String,

    /// `SQLite` database URL or file path; `sqlite::memory:` for a throwaway store.
    #[arg(long = "db", env = "CAREER_DB_URL", default_value = "sqlite://careerlaunch.sqlite3")]
    db_url: String,

    /// Comma-separated browser origins allowed by CORS.
    #[arg(long, env = "CAREER_CORS_ORIGINS", default_value = config::DEFAULT_CORS_ORIGINS)]
    cors_origins: String,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: config::parse_origins(&self.cors_origins),
        }
    }
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    log_fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if args.db_url.trim().is_empty() {
        return Err(ArgsError::InvalidDbUrl { raw: args.db_url }.into());
    }
    let db_url = normalize_sqlite_url(&args.db_url);

    // Open + migrate SQLite at startup so the server never starts half-ready.
    prepare_sqlite_file(&db_url)?;
    info!(%db_url, "opening database");
    let services = AppServices::new_sqlite(&db_url, Clock::system()).await?;

    let config = args.server_config();
    server::serve(&config, AppState::new(&services)).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
