//! # Contact Directory Runtime
//!
//! Interactive driver for the contact directory.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Install the tracing subscriber (logs go to stderr)
//! 3. Build the store and wire the services
//! 4. Load the index and print it
//! 5. Execute one command per stdin line, printing each view as JSON

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use directory_runtime::{Command, DirectoryConfig, DirectoryContainer, LogConfig, Session};

fn init_tracing(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("Invalid log filter {:?}", config.filter))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
struct ErrorOutput {
    error: String,
}

fn print_error(error: &dyn std::error::Error) -> Result<()> {
    warn!(error = %error, "Command failed");
    print(&ErrorOutput {
        error: error.to_string(),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = DirectoryConfig::from_env().context("Invalid configuration")?;
    init_tracing(&config.log)?;

    info!(
        seed = config.store.seed,
        latency_min_ms = config.store.latency_min_ms,
        latency_max_ms = config.store.latency_max_ms,
        "Starting contact directory"
    );

    let container = DirectoryContainer::new(&config).context("Failed to build the contact store")?;
    let mut session = Session::new(container);
    print(&session.start().await)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(err) => {
                print_error(&err)?;
                continue;
            }
        };

        match session.execute(command).await {
            Ok(output) => print(&output)?,
            Err(err) => print_error(&err)?,
        }
    }

    info!("Contact directory stopped");
    Ok(())
}
