mod error;
mod builder;

pub use error::Error;
pub use builder::ProviderClientBuilder;

use crate::enums::ServerTechnology;
use crate::interfaces::Credentials;
use crate::net::ApiRequest;
use crate::response::{CredentialsResponse, ServerList};
use crate::settings::SettingsStore;
use crate::transports::{Transport, WebApiTransport};
use std::time::Duration;
use reqwest::StatusCode;
use serde::de::{self, Deserialize, Unexpected};
use serde_json::Value;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.nordvpn.com";
/// Servers with a load at or below this are dropped from server lists.
pub const DEFAULT_LOAD_THRESHOLD: f64 = 7.0;
const CREDENTIALS_TIMEOUT: Duration = Duration::from_secs(10);
/// The username NordVPN expects when an access token is sent as the basic auth password.
const TOKEN_USERNAME: &str = "token";

/// A client for the NordVPN API which persists NordLynx credentials into a [`SettingsStore`].
#[derive(Debug)]
pub struct ProviderClient<T, S> {
    transport: T,
    settings: S,
    base_url: Url,
    load_threshold: f64,
    credentials_timeout: Duration,
}

/// Creates a [`ProviderClient`] using the default [`WebApiTransport`].
pub fn connect_webapi<S>(settings: S) -> Result<ProviderClient<WebApiTransport, S>, Error>
where
    S: SettingsStore,
{
    ProviderClientBuilder::new(WebApiTransport::new(), settings)
        .build()
}

impl<T, S> ProviderClient<T, S>
where
    T: Transport,
    S: SettingsStore,
{
    /// Creates a new [`ProviderClientBuilder`].
    pub fn builder(
        transport: T,
        settings: S,
    ) -> ProviderClientBuilder<T, S> {
        ProviderClientBuilder::new(transport, settings)
    }
    
    /// Gets the country list. The body is returned as-is, whatever the response status.
    pub async fn list_countries(&self) -> Result<String, Error> {
        let request = ApiRequest::get(self.endpoint("v1/countries")?);
        let response = self.transport.get(request).await?;
        
        Ok(response.body)
    }
    
    /// Gets the NordLynx servers in `country_id` with servers at or below the load threshold
    /// removed.
    ///
    /// The response status is not checked. A body that is not a JSON object is returned as-is,
    /// and an object without a `servers` sequence is returned re-encoded but unfiltered.
    pub async fn list_servers(&self, country_id: &str) -> Result<String, Error> {
        let request = ApiRequest::get(self.endpoint("v2/servers")?)
            .query("limit", "0")
            .query("filters[servers_technologies][id]", ServerTechnology::WireguardUdp.id().to_string())
            .query("filters[country_id]", country_id);
        let response = self.transport.get(request).await?;
        let mut servers = match ServerList::parse(&response.body) {
            Some(servers) => servers,
            None => {
                log::debug!("Server list is not a JSON object, passing body through");
                return Ok(response.body);
            },
        };
        
        if !servers.retain_above_load(self.load_threshold) {
            log::debug!("Server list has no servers sequence, passing object through");
        }
        
        servers.to_json().map_err(Error::Encode)
    }
    
    /// Stores `private_key` as a manually supplied key, replacing any saved credentials.
    /// Returns the stored JSON.
    pub fn set_manual_key(&self, private_key: &str) -> Result<String, Error> {
        self.save_credentials(&Credentials::manual(private_key.to_string()))
    }
    
    /// Exchanges `token` for a NordLynx private key and stores both. Returns the stored JSON.
    ///
    /// Nothing is stored unless the provider responds with 200 and a non-empty key.
    pub async fn exchange_token_for_key(&self, token: &str) -> Result<String, Error> {
        let request = ApiRequest::get(self.endpoint("v1/users/services/credentials")?)
            .basic_auth(TOKEN_USERNAME, token)
            .timeout(self.credentials_timeout);
        let response = self.transport.get(request).await?;
        
        if response.status != StatusCode::OK {
            return Err(Error::ProviderApi(response.status.to_string()));
        }
        
        let private_key = parse_credentials_response(&response.body)?
            .private_key()
            .ok_or(Error::MissingCredential)?;
        
        self.save_credentials(&Credentials {
            private_key,
            token: token.to_string(),
        })
    }
    
    /// Gets the saved credentials JSON, as stored. Empty if none are configured.
    pub fn get_saved_credentials(&self) -> Result<String, Error> {
        Ok(self.settings.get_nord()?)
    }
    
    /// Gets the saved credentials, or `None` if none are configured.
    pub fn saved_credentials(&self) -> Result<Option<Credentials>, Error> {
        let stored = self.settings.get_nord()?;
        
        if stored.is_empty() {
            return Ok(None);
        }
        
        let credentials = serde_json::from_str::<Credentials>(&stored)
            .map_err(Error::Decode)?;
        
        Ok(Some(credentials))
    }
    
    /// Removes the saved credentials.
    pub fn clear_saved_credentials(&self) -> Result<(), Error> {
        self.settings.set_nord("")?;
        log::info!("Cleared NordVPN credentials");
        
        Ok(())
    }
    
    fn save_credentials(&self, credentials: &Credentials) -> Result<String, Error> {
        let json = serde_json::to_string(credentials)
            .map_err(Error::Encode)?;
        
        self.settings.set_nord(&json)?;
        log::info!("Saved NordVPN credentials (manual: {})", credentials.is_manual());
        
        Ok(json)
    }
    
    fn endpoint(&self, pathname: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(pathname)?)
    }
}

fn parse_credentials_response(body: &str) -> Result<CredentialsResponse, Error> {
    let value = serde_json::from_str::<Value>(body)
        .map_err(Error::Decode)?;
    
    if !value.is_object() {
        return Err(Error::Decode(de::Error::invalid_type(
            Unexpected::Other("non-object JSON value"),
            &"a JSON object",
        )));
    }
    
    CredentialsResponse::deserialize(value).map_err(Error::Decode)
}
