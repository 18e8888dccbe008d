use url::Url;

/// Path of the upload handler on the messaging server.
pub const UPLOAD_PATH: &str = "/upload";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub server_url: Url,
}

impl ApiConfig {
    pub fn from_server_url(server_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            server_url: Url::parse(server_url)?,
        })
    }

    /// Full URL the multipart form is posted to.
    pub fn upload_url(&self) -> Result<Url, url::ParseError> {
        self.server_url.join(UPLOAD_PATH)
    }
}
