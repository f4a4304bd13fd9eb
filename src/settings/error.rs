#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Settings backend error: {}", .0)]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an error from the backing store.
    pub fn backend<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Backend(error.into())
    }
}
