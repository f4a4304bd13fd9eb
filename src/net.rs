use std::time::Duration;
use reqwest::StatusCode;
use url::Url;

/// Credentials sent in an `Authorization: Basic` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// An outbound GET request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub url: Url,
    pub query: Vec<(&'static str, String)>,
    pub basic_auth: Option<BasicAuth>,
    /// When `None` the transport's own default applies.
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    /// Creates a new [`ApiRequest`] for `url` with no query, auth or timeout.
    pub fn get(url: Url) -> Self {
        Self {
            url,
            query: Vec::new(),
            basic_auth: None,
            timeout: None,
        }
    }
    
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }
    
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }
    
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
