use crate::transports;
use crate::transports::BoxError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request: {}", .0)]
    Transport(#[source] BoxError),
    #[error("Error reading response body: {}", .0)]
    Read(#[source] BoxError),
    #[error("NordVPN API error: {}", .0)]
    ProviderApi(String),
    #[error("Decode error: {}", .0)]
    Decode(#[source] serde_json::Error),
    #[error("Encode error: {}", .0)]
    Encode(#[source] serde_json::Error),
    #[error("Failed to retrieve NordLynx private key")]
    MissingCredential,
    #[error("Invalid URL: {}", .0)]
    InvalidUrl(#[from] url::ParseError),
    #[error("Settings error: {}", .0)]
    Settings(#[from] crate::settings::Error),
}

impl From<transports::Error> for Error {
    fn from(error: transports::Error) -> Self {
        match error {
            transports::Error::Request(error) => Self::Transport(error),
            transports::Error::Read(error) => Self::Read(error),
        }
    }
}
