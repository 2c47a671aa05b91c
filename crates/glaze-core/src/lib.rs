//! Glaze Core - Embeddable batch tint-and-export library.
//!
//! Glaze takes a batch of source images, composites a solid color tint over
//! each one, and writes the results out without ever overwriting a source
//! file.
//!
//! # Architecture
//!
//! The pipeline is a straight line per image:
//!
//! ```text
//! Image → Validate → Decode → Tint → Resolve destination → Encode
//! ```
//!
//! Failures are recorded per image; a bad file never aborts the batch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use glaze_core::{Config, Exporter, ExportJob, Tint};
//!
//! #[tokio::main]
//! async fn main() -> glaze_core::Result<()> {
//!     let config = Config::load()?;
//!     let exporter = Exporter::new(&config);
//!
//!     let job = ExportJob::new(vec!["./photo.jpg".into()], Tint::default());
//!     let report = exporter.export(job).await;
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod blend;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod tint;
pub mod types;

// Re-exports for convenient access
pub use blend::BlendMode;
pub use config::Config;
pub use error::{ConfigError, ExportError, GlazeError, Result};
pub use pipeline::Exporter;
pub use report::{ReportFormat, ReportWriter};
pub use tint::{Rgb, Tint};
pub use types::{ExportJob, ExportRecord, ExportReport, ExportStatus};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
