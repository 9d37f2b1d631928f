//! WeDay CLI
//!
//! Command-line interface for WeDay:
//! - Render a planner view in the terminal
//! - Serve the HTTP API
//! - Generate a default config file

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use weday::api::{serve, AppState};
use weday::config::{generate_default_config, init_logging, Config};
use weday::dashboard::{render_text, View, ViewPayload};

#[derive(Parser)]
#[command(name = "weday")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wedding planning ledgers for guests, tasks, vendors and budget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a view of the planner
    View {
        /// Page path: /dashboard, /guests, /vendors, /tasks or /budget
        #[arg(default_value = "/dashboard")]
        path: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Start the HTTP API server
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }

        Commands::View { path, format } => {
            let config = load_config(cli.config.as_deref())?;
            init_logging(&config.logging)?;

            let planner = config.planner.planner()?;
            let payload = ViewPayload::for_path(&path, planner.ledgers(), Utc::now());

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&payload)?),
                OutputFormat::Table => print!("{}", render_text(&payload)),
            }

            if payload.view() == View::NotFound {
                std::process::exit(2);
            }
        }

        Commands::Serve { port } => {
            let mut config = load_config(cli.config.as_deref())?;
            init_logging(&config.logging)?;
            if let Some(port) = port {
                config.api.port = port;
            }

            tracing::info!("Starting WeDay API server v{}", env!("CARGO_PKG_VERSION"));
            let planner = config.planner.planner()?;
            let state = AppState::from_planner(planner, config.api.clone());
            serve(state, &config.api).await?;
        }
    }

    Ok(())
}

/// An explicit config file must load; otherwise fall back to the defaults
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Ok(Config::load_with_env(path)?),
        None => Ok(Config::load_default()),
    }
}
