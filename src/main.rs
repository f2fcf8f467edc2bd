use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shopkeep::error::EXIT_OK;
use shopkeep::{App, AppError, Config, ConfigError, RuntimeConfig};

/// Shopkeep - a command-line shopping assistant
#[derive(Parser, Debug)]
#[command(name = "shopkeep")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ~/.config/shopkeep/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Log file path
    #[arg(long, default_value = "/tmp/shopkeep.log")]
    log_file: PathBuf,
}

/// Set up file-based logging
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopkeep=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(log_file).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

fn load_runtime(args: &Args) -> Result<RuntimeConfig, ConfigError> {
    let mut config = match args.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Apply CLI overrides
    if let Some(ref model) = args.model {
        config.agent.model = model.clone();
    }

    RuntimeConfig::from_env(&config)
}

async fn run(args: Args) -> Result<(), AppError> {
    let runtime = load_runtime(&args)?;
    info!(
        "Starting with model {} against {}",
        runtime.agent.model, runtime.catalog.url
    );

    let app = App::new(&runtime)?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    app.run(stdin, &mut stdout).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_file) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Load .env files (local first, then home directory)
    // Errors are ignored - files are optional
    let _ = dotenvy::from_filename(".env");
    if let Some(home) = dirs::home_dir() {
        let _ = dotenvy::from_path(home.join(".env"));
    }

    match run(args).await {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("{}", e.user_message());
            ExitCode::from(e.exit_code())
        }
    }
}
