pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request: {}", .0)]
    Request(#[source] BoxError),
    #[error("Error reading response body: {}", .0)]
    Read(#[source] BoxError),
}
