//! Cursor Pager: history listing server
//!
//! ```sh
//! # Run with default config (~/.config/cursor-pager/config.toml)
//! cursor-pager
//!
//! # Custom config path and port
//! cursor-pager --config ./config.toml --port 3000
//!
//! # Validate config without starting
//! cursor-pager --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use cursor_pager::config::AppConfig;
use cursor_pager::server::{demo_repository, init_tracing, run};

/// Cursor-paginated job history API.
#[derive(Parser, Debug)]
#[command(name = "cursor-pager", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PAGER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(cursor_pager::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Log level   : {}", config.logging.level);
        println!("   Demo records: {}", config.demo.seed_records);
        return Ok(());
    }

    let repo = demo_repository(&config);
    run(&config, repo).await
}
