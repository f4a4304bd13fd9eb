use serde::{Deserialize, Serialize};

/// NordLynx credentials as persisted in the settings store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// The NordLynx (WireGuard) private key.
    pub private_key: String,
    /// The access token the key was obtained with. Empty for a manually supplied key.
    pub token: String,
}

impl Credentials {
    /// Creates credentials for a key supplied directly, with no token to refresh it from.
    pub fn manual(private_key: String) -> Self {
        Self {
            private_key,
            token: String::new(),
        }
    }
    
    /// Checks if the key was supplied manually.
    pub fn is_manual(&self) -> bool {
        self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn serializes_private_key_first() {
        let credentials = Credentials {
            private_key: "xyz".into(),
            token: "T".into(),
        };
        
        assert_eq!(serde_json::to_string(&credentials).unwrap(), r#"{"private_key":"xyz","token":"T"}"#);
        assert!(!credentials.is_manual());
        assert!(Credentials::manual("abc".into()).is_manual());
    }
}
