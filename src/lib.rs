//! A client for the NordVPN API.
//! 
//! Lists countries and NordLynx servers, and exchanges an access token for a NordLynx private 
//! key which is persisted, along with the token, into a [`settings::SettingsStore`].

pub mod enums;
pub mod interfaces;
pub mod net;
pub mod provider_client;
pub mod response;
pub mod settings;
pub mod transports;

pub (crate) mod serializers;

pub use provider_client::{ProviderClient, ProviderClientBuilder, Error};
