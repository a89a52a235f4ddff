//! PUT uploader
//!
//! The core upload operation: read the local file, encode the multipart
//! envelope, issue a PUT with an explicit Content-Length under the
//! configured deadline, and classify the response.
//!
//! # Example
//!
//! ```no_run
//! use formput::upload::put::PutUploader;
//! use formput::upload::{OutputKind, Uploader};
//! use std::path::Path;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let uploader = PutUploader::new(
//!     "http://localhost:34567/api/v1/recordings/livevideo",
//!     Duration::from_secs(5),
//! );
//!
//! let outcome = uploader
//!     .upload(Path::new("sample.mp4"), "test6", OutputKind::Mp4)
//!     .await?;
//! println!("Uploaded {} bytes to {}", outcome.bytes_sent, outcome.url);
//! # Ok(())
//! # }
//! ```

use super::form::MultipartForm;
use super::{OutputKind, UploadError, UploadOutcome, Uploader, FILE_FIELD, TIMESTAMP_FIELD};
use crate::metrics;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::StatusCode;
use std::path::Path;
use std::time::{Duration, Instant};

/// PUT upload handler
///
/// Immutable after construction and holds no per-call state, so one value
/// may serve concurrent uploads. Each call allocates its own body buffer,
/// HTTP client and request.
pub struct PutUploader {
    /// Base URL the destination segment is appended to, no trailing slash.
    endpoint: String,
    /// Deadline applied to the whole request lifecycle of each call.
    timeout: Duration,
}

impl PutUploader {
    /// Create a new PUT uploader.
    ///
    /// The endpoint is not validated here; a malformed URL surfaces as a
    /// `Network` error when the first upload executes.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    /// Get the base endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the per-call timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Destination URL for a segment: `{endpoint}/{segment}`, concatenated
    /// verbatim. Callers are responsible for supplying a safe segment.
    pub fn destination_url(&self, remote_segment: &str) -> String {
        format!("{}/{}", self.endpoint, remote_segment)
    }
}

#[async_trait]
impl Uploader for PutUploader {
    #[tracing::instrument(
        name = "upload.put",
        skip(self, local_path),
        fields(
            http.url = tracing::field::Empty,
            upload.output = %output,
            upload.bytes = tracing::field::Empty,
            http.status_code = tracing::field::Empty
        ),
        err
    )]
    async fn upload(
        &self,
        local_path: &Path,
        remote_segment: &str,
        output: OutputKind,
    ) -> Result<UploadOutcome, UploadError> {
        let start_time = Instant::now();

        // Whole file is buffered; a missing or unreadable path fails here
        // before any network activity.
        let content = match tokio::fs::read(local_path).await {
            Ok(content) => content,
            Err(e) => {
                let duration = start_time.elapsed();
                metrics::record_upload_duration("put", duration.as_secs_f64());
                metrics::record_upload_failure();
                metrics::record_error("io");

                let err = UploadError::Io {
                    path: local_path.to_path_buf(),
                    source: e,
                };
                tracing::error!(
                    error = %err,
                    duration_ms = duration.as_millis(),
                    "PUT upload failed"
                );
                return Err(err);
            }
        };

        let filename = local_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| local_path.to_string_lossy().into_owned());

        let mut form = MultipartForm::new();
        form.add_file(FILE_FIELD, &filename, &content);
        form.add_text(TIMESTAMP_FIELD, &Utc::now().timestamp().to_string());

        let content_type = form.content_type();
        let body = form.finish();
        let bytes_sent = body.len() as u64;

        let url = self.destination_url(remote_segment);

        let span = tracing::Span::current();
        span.record("http.url", url.as_str());
        span.record("upload.bytes", bytes_sent);

        // Fresh default client per call; its timeout bounds connect, send
        // and response headers together.
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| UploadError::Network { source: e })?;

        let result = client
            .put(&url)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, bytes_sent)
            .body(body)
            .send()
            .await;

        let duration = start_time.elapsed();
        metrics::record_upload_duration("put", duration.as_secs_f64());

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                metrics::record_upload_failure();
                let err = if e.is_timeout() {
                    metrics::record_error("timeout");
                    UploadError::Timeout {
                        timeout: self.timeout,
                    }
                } else {
                    metrics::record_error("network");
                    UploadError::Network { source: e }
                };
                tracing::error!(
                    error = %err,
                    duration_ms = duration.as_millis(),
                    "PUT upload failed"
                );
                return Err(err);
            }
        };

        let status = response.status();
        span.record("http.status_code", status.as_u16());

        // Response body is not inspected, but it is drained so the
        // connection is released on every path.
        let _ = response.bytes().await;

        if status != StatusCode::OK {
            metrics::record_upload_failure();
            metrics::record_error("rejected");

            tracing::error!(
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "PUT upload rejected"
            );

            return Err(UploadError::Rejected {
                status: status.as_u16(),
            });
        }

        metrics::record_upload_success(bytes_sent);

        tracing::info!(
            url = %url,
            bytes_sent = bytes_sent,
            duration_ms = duration.as_millis(),
            "PUT upload completed"
        );

        Ok(UploadOutcome { url, bytes_sent })
    }
}
