//! Best-effort fetch of the holder's picture.
//!
//! The picture is a non-critical side channel of issuance: any failure here
//! degrades the document (a fallback line replaces the image) but never
//! aborts the request, so the fetcher reports absence rather than errors.

use url::Url;

/// Fetches pictures over HTTP for embedding in pass documents.
#[derive(Debug, Clone)]
pub struct PictureFetcher {
    client: reqwest::Client,
}

impl PictureFetcher {
    /// Create a new fetcher.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Fetch the resource at `raw_url`, returning its bytes on transport
    /// success and `None` otherwise.
    ///
    /// Failures are logged at `warn` and swallowed; the caller decides how
    /// the document degrades.
    pub async fn fetch(&self, raw_url: &str) -> Option<Vec<u8>> {
        let url = match Url::parse(raw_url) {
            Ok(url) => url,
            Err(error) => {
                tracing::warn!(url = raw_url, %error, "picture URL is not valid");
                return None;
            }
        };

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(url = raw_url, %error, "picture fetch failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = raw_url, %status, "picture fetch returned non-success status");
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(error) => {
                tracing::warn!(url = raw_url, %error, "picture body could not be read");
                None
            }
        }
    }
}
