use super::Error;
use crate::net::{ApiRequest, ApiResponse};
use reqwest::{Client, RequestBuilder};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref DEFAULT_CLIENT: Client = Client::new();
}

/// Gets a response.
pub async fn get_response(
    client: &Client,
    request: ApiRequest,
) -> Result<ApiResponse, Error> {
    log::debug!("GET {}", request.url);
    
    let response = build_request(client, request)
        .send()
        .await
        .map_err(|error| Error::Request(error.into()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| Error::Read(error.into()))?;
    
    Ok(ApiResponse {
        status,
        body,
    })
}

fn build_request(client: &Client, request: ApiRequest) -> RequestBuilder {
    let ApiRequest {
        url,
        query,
        basic_auth,
        timeout,
    } = request;
    let mut builder = client.get(url);
    
    if !query.is_empty() {
        builder = builder.query(&query);
    }
    
    if let Some(auth) = basic_auth {
        builder = builder.basic_auth(auth.username, Some(auth.password));
    }
    
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    
    builder
}
