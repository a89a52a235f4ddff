//! Upload module
//!
//! Handles single-file HTTP PUT uploads with a multipart/form-data body.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod form;
pub mod put;

/// Multipart field name carrying the file content.
pub const FILE_FIELD: &str = "File";

/// Multipart field name carrying the upload timestamp.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Upload errors
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("upload failed reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("upload failed: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    #[error("upload timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("upload rejected with status code {status}")]
    Rejected { status: u16 },
}

/// Upload result
///
/// `bytes_sent` is the length of the finalized multipart body, which includes
/// boundary framing and the timestamp field on top of the raw file size.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub url: String,
    pub bytes_sent: u64,
}

/// Output container hint for an upload.
///
/// Carried through to the uploader but not reflected in the wire format;
/// reserved for future content-type negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Mp4,
    Webm,
    Ogg,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Mp4 => write!(f, "mp4"),
            OutputKind::Webm => write!(f, "webm"),
            OutputKind::Ogg => write!(f, "ogg"),
        }
    }
}

/// Upload handler trait
#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    /// Upload a local file to the remote destination segment.
    async fn upload(
        &self,
        local_path: &Path,
        remote_segment: &str,
        output: OutputKind,
    ) -> Result<UploadOutcome, UploadError>;
}
