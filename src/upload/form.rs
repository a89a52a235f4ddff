//! In-memory multipart/form-data encoder
//!
//! Builds the complete request body in memory before any network I/O. The
//! encoder is used instead of reqwest's streaming `multipart::Form` because
//! the finalized body length must be reported back to the caller and sent as
//! an explicit `Content-Length` (no chunked transfer encoding).

use bytes::{BufMut, Bytes, BytesMut};
use uuid::Uuid;

/// Multipart/form-data body under construction.
///
/// Parts are encoded in insertion order. `finish` appends the closing
/// boundary marker and freezes the buffer.
#[derive(Debug)]
pub struct MultipartForm {
    boundary: String,
    buf: BytesMut,
}

impl MultipartForm {
    /// Create an empty form with a freshly generated boundary.
    pub fn new() -> Self {
        let boundary = format!("----------------------------{}", Uuid::new_v4().simple());
        Self {
            boundary,
            buf: BytesMut::new(),
        }
    }

    /// The boundary string separating parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// The boundary-qualified Content-Type header value for this form.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encoded length so far, excluding the closing boundary marker.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append a file part with the given field name, filename and content.
    pub fn add_file(&mut self, field: &str, filename: &str, content: &[u8]) {
        self.open_part();
        self.buf.put_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                escape_quotes(field),
                escape_quotes(filename)
            )
            .as_bytes(),
        );
        self.buf
            .put_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        self.buf.put_slice(content);
        self.buf.put_slice(b"\r\n");
    }

    /// Append a plain text field part.
    pub fn add_text(&mut self, field: &str, value: &str) {
        self.open_part();
        self.buf.put_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                escape_quotes(field)
            )
            .as_bytes(),
        );
        self.buf.put_slice(value.as_bytes());
        self.buf.put_slice(b"\r\n");
    }

    /// Append the closing boundary marker and return the finalized body.
    pub fn finish(mut self) -> Bytes {
        self.buf
            .put_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.buf.freeze()
    }

    fn open_part(&mut self) {
        self.buf
            .put_slice(format!("--{}\r\n", self.boundary).as_bytes());
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape backslashes and double quotes for a quoted-string header value,
/// stripping CR/LF so a hostile filename cannot break part framing.
fn escape_quotes(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .flat_map(|c| match c {
            '\\' => vec!['\\', '\\'],
            '"' => vec!['\\', '"'],
            c => vec![c],
        })
        .collect()
}
