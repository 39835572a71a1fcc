//! VTY harness descriptor tool.
//!
//! Inspects and lints the application descriptors the test-orchestration
//! framework consumes. This binary never launches the applications it
//! describes.
//!
//! Usage:
//!     vtyharness apps
//!     vtyharness configs osmo-smlc
//!     vtyharness --descriptor appdesc.toml check

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vtyharness_appdesc::AppDescriptor;

#[derive(Parser, Debug)]
#[command(name = "vtyharness", about = "Application descriptor tools for VTY testing")]
struct Cli {
    /// Load a TOML descriptor file instead of the built-in osmo-smlc descriptor
    #[arg(long, global = true)]
    descriptor: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the application table
    Apps {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Print the config file paths registered for an application
    Configs {
        /// Short application identifier (e.g. osmo-smlc)
        app: String,
    },
    /// Print the default VTY launch command
    VtyCommand,
    /// Validate descriptor consistency
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vtyharness=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let descriptor = load_descriptor(cli.descriptor.as_deref())?;

    match cli.command {
        Commands::Apps { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(descriptor.apps())?);
            } else {
                for app in descriptor.apps() {
                    println!("{}  [{}]", app, app.id);
                }
            }
        }
        Commands::Configs { app } => {
            let paths = descriptor
                .config_paths(&app)
                .with_context(|| format!("No config paths for application '{}'", app))?;
            for path in paths {
                println!("{}", path);
            }
        }
        Commands::VtyCommand => {
            println!("{}", descriptor.vty_command().join(" "));
        }
        Commands::Check => {
            descriptor.validate().context("Descriptor is inconsistent")?;
            println!("descriptor OK: {} application(s)", descriptor.apps().len());
        }
    }

    Ok(())
}

fn load_descriptor(path: Option<&std::path::Path>) -> Result<AppDescriptor> {
    match path {
        Some(path) => {
            info!("Loading descriptor from {}", path.display());
            AppDescriptor::from_file(path)
                .with_context(|| format!("Failed to load descriptor {}", path.display()))
        }
        None => Ok(AppDescriptor::osmo_smlc()),
    }
}
