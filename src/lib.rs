//! VisionLens Library
//!
//! Client core for submitting an image to a remote captioning / text
//! extraction service, with independent per-operation request tracking.

pub mod config;
pub mod error;
pub mod gui;
pub mod image;
pub mod service;
pub mod session;
