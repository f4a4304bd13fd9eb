mod error;
mod memory;

pub use error::Error;
pub use memory::MemorySettingsStore;

use std::sync::Arc;

/// The key under which the NordVPN credentials are stored.
pub const NORD_KEY: &str = "nord";

/// Access to the settings entry holding NordVPN credentials.
/// 
/// The store owns the persisted value. An empty string means no credentials are configured.
pub trait SettingsStore: Send + Sync {
    /// Overwrites the entry with `value`.
    fn set_nord(&self, value: &str) -> Result<(), Error>;
    
    /// Gets the entry, or an empty string if it was never set.
    fn get_nord(&self) -> Result<String, Error>;
}

impl<S> SettingsStore for Arc<S>
where
    S: SettingsStore + ?Sized,
{
    fn set_nord(&self, value: &str) -> Result<(), Error> {
        (**self).set_nord(value)
    }
    
    fn get_nord(&self) -> Result<String, Error> {
        (**self).get_nord()
    }
}
