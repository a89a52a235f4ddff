//! Formput Library
//!
//! Uploads a local file to a remote HTTP endpoint with a PUT request
//! carrying a multipart/form-data body, under a per-call deadline.
//!
//! # Features
//!
//! - **Single Shot**: One PUT per call, no retries or partial results
//! - **Bounded**: The configured timeout covers the whole request lifecycle
//! - **Exact Accounting**: Reports the finalized multipart body length sent
//! - **Stateless**: One uploader value serves concurrent calls safely
//!
//! # Example
//!
//! ```no_run
//! use formput::upload::put::PutUploader;
//! use formput::upload::{OutputKind, Uploader};
//! use std::path::Path;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let uploader = PutUploader::new(
//!         "http://localhost:34567/api/v1/recordings/livevideo",
//!         Duration::from_secs(5),
//!     );
//!     let outcome = uploader
//!         .upload(Path::new("sample.mp4"), "test6", OutputKind::Mp4)
//!         .await?;
//!     println!("{} ({} bytes)", outcome.url, outcome.bytes_sent);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod metrics;
pub mod upload;

// Re-export commonly used types
pub use config::Config;
pub use upload::put::PutUploader;
pub use upload::{OutputKind, UploadError, UploadOutcome, Uploader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
