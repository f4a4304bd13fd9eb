mod error;

pub mod web_api;

pub use error::{BoxError, Error};
pub use web_api::WebApiTransport;

use crate::net::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Issues requests on behalf of a [`crate::provider_client::ProviderClient`].
/// 
/// Implementations must drain the body before returning so that a failure to read it surfaces
/// as [`Error::Read`] rather than later.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a GET request and reads the whole response.
    async fn get(&self, request: ApiRequest) -> Result<ApiResponse, Error>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn get(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        (**self).get(request).await
    }
}
