//! The tint-and-export pipeline.
//!
//! This module contains the stages the exporter runs per image, in order:
//! - **discovery**: find image files in directories
//! - **validate**: pre-decode validation
//! - **decode**: load and decode source images
//! - **naming**: resolve destinations and guard against source overwrites
//! - **encode**: write tinted images to disk
//! - **exporter**: orchestrates the full pipeline

pub mod decode;
pub mod discovery;
pub mod encode;
pub mod exporter;
pub mod naming;
pub mod validate;

// Re-exports for convenient access
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::{DiscoveredFile, FileDiscovery};
pub use encode::ImageEncoder;
pub use exporter::Exporter;
pub use naming::{Destination, OutputNamer, COPY_MARKER};
pub use validate::Validator;
