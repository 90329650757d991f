use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
use catalog::Catalog;

mod progress;
use progress::SqliteProgressStore;

mod server;
use server::{run_server, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite database file to use for progress storage.
    #[clap(value_parser = parse_path)]
    pub progress_db: PathBuf,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8000)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Origin allowed to make cross-origin requests. Repeatable.
    /// When not given, any origin is allowed.
    #[clap(long = "cors-origin")]
    pub cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let catalog = Catalog::builtin();
    info!(
        "Catalog has {} career paths",
        catalog.get_career_paths_count()
    );

    info!(
        "Opening SQLite progress database at {:?}...",
        cli_args.progress_db
    );
    let progress_store = Arc::new(SqliteProgressStore::new(&cli_args.progress_db)?);

    info!("Ready to serve at port {}!", cli_args.port);
    run_server(
        catalog,
        progress_store,
        cli_args.logging_level,
        cli_args.port,
        cli_args.cors_origins,
    )
    .await
}
