//! Minimal HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response returned by the
//! network layer. It contains the final URL (after redirects, if the client
//! follows them), the numeric status code and the raw body bytes. Headers are
//! not kept since nothing downstream reports them.
//!
//! Note that the body is whatever the client handed back after transparent
//! content decoding, so its length is the decoded length.

/// Simple structure for HTTP responses.
#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Number of body bytes received.
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}
