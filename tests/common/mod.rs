#![allow(dead_code)]

pub mod fake_service;
pub mod mock_vision;

use std::path::PathBuf;
use std::process::Output;
use tempfile::TempDir;

/// Isolated environment for running the `visionlens` binary
pub struct TestContext {
    pub temp_dir: TempDir,
    pub image_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("config"))
            .expect("Failed to create config dir");

        let image_path = temp_dir.path().join("sample.png");
        std::fs::write(&image_path, b"\x89PNG\r\n\x1a\nfake-image-bytes")
            .expect("Failed to write sample image");

        Self {
            temp_dir,
            image_path,
        }
    }

    /// Run the CLI with the config dir pointed inside the temp dir
    pub async fn run(&self, args: &[&str]) -> Output {
        let bin_path = env!("CARGO_BIN_EXE_visionlens");

        tokio::process::Command::new(bin_path)
            .args(args)
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env_remove("VISIONLENS_SERVICE_URL")
            .env_remove("RUST_LOG")
            .output()
            .await
            .expect("Failed to run visionlens")
    }

    pub fn image_arg(&self) -> &str {
        self.image_path.to_str().expect("Temp path is not UTF-8")
    }
}

/// A small image handle for in-process tests
pub fn sample_image(name: &str) -> visionlens::image::SelectedImage {
    visionlens::image::SelectedImage::new(name, b"fake-image-bytes".to_vec())
}
