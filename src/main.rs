//! VisionLens - Image captioning and text extraction from the command line
//!
//! Loads one image, dispatches the requested operations concurrently and
//! prints each result as it settles.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use visionlens::config::Config;
use visionlens::image::SelectedImage;
use visionlens::service::{create_service, VisionService};
use visionlens::session::{perform, OperationKind, OperationState, Session};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Vision service base URL (overrides config)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a caption for an image
    Caption { image: PathBuf },
    /// Extract the text in an image
    Text { image: PathBuf },
    /// Run both operations at once
    Both { image: PathBuf },
    /// Check that the vision service is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(url) = args.url {
        config.override_service_url(url);
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }

    // Setup logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_directive()))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🔭 VisionLens v{} starting...", env!("CARGO_PKG_VERSION"));

    let service = create_service(&config)?;

    match args.command {
        Command::Health => {
            if service.health_check().await {
                println!("✅ Service reachable at {}", config.service_url);
                Ok(())
            } else {
                bail!("Service unreachable at {}", config.service_url)
            }
        }
        Command::Caption { image } => run(service, &image, &[OperationKind::Caption]).await,
        Command::Text { image } => run(service, &image, &[OperationKind::TextExtraction]).await,
        Command::Both { image } => run(service, &image, &OperationKind::ALL).await,
    }
}

async fn run(service: Arc<dyn VisionService>, path: &Path, kinds: &[OperationKind]) -> Result<()> {
    let image = SelectedImage::load(path)
        .await
        .with_context(|| format!("Could not read image {}", path.display()))?;

    let mut session = Session::new();
    session.select_image(image);

    let mut in_flight = FuturesUnordered::new();
    for &kind in kinds {
        let dispatch = session.dispatch(kind)?;
        in_flight.push(perform(service.clone(), dispatch));
    }

    while let Some(settlement) = in_flight.next().await {
        let kind = settlement.kind;
        if session.settle(settlement) {
            print_state(kind, session.state(kind));
        }
    }

    let failed = kinds
        .iter()
        .filter(|&&k| session.state(k).error_message().is_some())
        .count();
    if failed > 0 {
        bail!("{} of {} operations failed", failed, kinds.len());
    }
    Ok(())
}

fn print_state(kind: OperationKind, state: &OperationState) {
    let heading = match kind {
        OperationKind::Caption => "📝 Caption:",
        OperationKind::TextExtraction => "📜 Extracted Text:",
    };
    match state {
        OperationState::Succeeded(text) => println!("{}\n{}\n", heading, text),
        OperationState::Failed(message) => eprintln!("⚠️ {}\n", message),
        OperationState::Idle | OperationState::Pending => {}
    }
}
