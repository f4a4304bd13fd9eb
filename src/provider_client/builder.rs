use super::{Error, ProviderClient, DEFAULT_BASE_URL, DEFAULT_LOAD_THRESHOLD, CREDENTIALS_TIMEOUT};
use crate::transports::Transport;
use crate::settings::SettingsStore;
use std::time::Duration;
use url::Url;

pub struct ProviderClientBuilder<T, S> {
    transport: T,
    settings: S,
    base_url: Option<String>,
    load_threshold: f64,
    credentials_timeout: Duration,
}

impl<T, S> ProviderClientBuilder<T, S>
where
    T: Transport,
    S: SettingsStore,
{
    pub fn new(transport: T, settings: S) -> Self {
        Self {
            transport,
            settings,
            base_url: None,
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            credentials_timeout: CREDENTIALS_TIMEOUT,
        }
    }
    
    /// Sets the API base URL. Defaults to `https://api.nordvpn.com`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
    
    /// Servers at or below this load are dropped from server lists.
    pub fn load_threshold(mut self, load_threshold: f64) -> Self {
        self.load_threshold = load_threshold;
        self
    }
    
    pub fn credentials_timeout(mut self, credentials_timeout: Duration) -> Self {
        self.credentials_timeout = credentials_timeout;
        self
    }
    
    pub fn build(self) -> Result<ProviderClient<T, S>, Error> {
        let mut base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        
        // endpoint paths are joined relative to the base
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            
            base_url.set_path(&path);
        }
        
        
        Ok(ProviderClient {
            transport: self.transport,
            settings: self.settings,
            base_url,
            load_threshold: self.load_threshold,
            credentials_timeout: self.credentials_timeout,
        })
    }
}
