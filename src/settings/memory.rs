use super::{Error, SettingsStore, NORD_KEY};
use dashmap::DashMap;

/// An in-memory [`SettingsStore`].
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    inner: DashMap<String, String>,
}

impl MemorySettingsStore {
    /// Creates a new empty [`MemorySettingsStore`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn set_nord(&self, value: &str) -> Result<(), Error> {
        if value.is_empty() {
            self.inner.remove(NORD_KEY);
        } else {
            self.inner.insert(NORD_KEY.to_string(), value.to_string());
        }
        
        Ok(())
    }
    
    fn get_nord(&self) -> Result<String, Error> {
        Ok(self.inner
            .get(NORD_KEY)
            .map(|value| value.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn unset_entry_is_empty() {
        let store = MemorySettingsStore::new();
        
        assert_eq!(store.get_nord().unwrap(), "");
    }
    
    #[test]
    fn overwrites_and_clears() {
        let store = MemorySettingsStore::new();
        
        store.set_nord("first").unwrap();
        store.set_nord("second").unwrap();
        assert_eq!(store.get_nord().unwrap(), "second");
        
        store.set_nord("").unwrap();
        assert_eq!(store.get_nord().unwrap(), "");
        assert!(store.inner.is_empty());
    }
}
