mod helpers;

use super::{Error, Transport};
use crate::net::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use reqwest::Client;

/// [`Transport`] backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct WebApiTransport {
    client: Client,
}

#[async_trait]
impl Transport for WebApiTransport {
    async fn get(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        helpers::get_response(&self.client, request).await
    }
}

impl WebApiTransport {
    /// Creates a new [`WebApiTransport`] using the shared default client.
    pub fn new() -> Self {
        Self {
            client: helpers::DEFAULT_CLIENT.clone(),
        }
    }
    
    /// Creates a new [`WebApiTransport`] using `client`. Use this to set a user agent, a proxy 
    /// or a default timeout for requests that do not carry their own.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
        }
    }
}

impl Default for WebApiTransport {
    fn default() -> Self {
        Self::new()
    }
}
