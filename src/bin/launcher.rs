//! VisionLens Launcher - GUI Application
//!
//! Run with: cargo run --bin visionlens-launcher

use iced::application;
use tracing_subscriber::EnvFilter;

// Import from the library
use visionlens::config::Config;
use visionlens::gui::VisionLensApp;

fn main() -> iced::Result {
    // Setup logging
    let config = Config::load().unwrap_or_default();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    application(VisionLensApp::title, VisionLensApp::update, VisionLensApp::view)
        .theme(VisionLensApp::theme)
        .run_with(VisionLensApp::new)
}
