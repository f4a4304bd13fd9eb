use crate::serializers::string_or_none;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A decoded server list. Only `servers` is given meaning, every other field is carried through
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerList {
    inner: Map<String, Value>,
}

impl ServerList {
    /// Parses a server list body. Returns `None` if `body` is not a JSON object.
    pub fn parse(body: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(inner)) => Some(Self { inner }),
            _ => None,
        }
    }
    
    /// Gets the `servers` sequence, if present and a sequence.
    pub fn servers(&self) -> Option<&Vec<Value>> {
        self.inner.get("servers")?.as_array()
    }
    
    /// Retains only the servers whose `load` is above `threshold`, in order. Returns `false` 
    /// and leaves the list untouched if there is no `servers` sequence.
    pub fn retain_above_load(&mut self, threshold: f64) -> bool {
        match self.inner.get_mut("servers") {
            Some(Value::Array(servers)) => {
                servers.retain(|server| {
                    server_load(server).map_or(false, |load| load > threshold)
                });
                true
            },
            _ => false,
        }
    }
    
    /// Encodes the list back to JSON, keeping the key order it was parsed with.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.inner)
    }
}

/// Gets the numeric `load` of a server record.
pub fn server_load(server: &Value) -> Option<f64> {
    server.get("load")?.as_f64()
}

/// The body of `/v1/users/services/credentials`.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsResponse {
    #[serde(default, deserialize_with = "string_or_none")]
    pub nordlynx_private_key: Option<String>,
}

impl CredentialsResponse {
    /// Gets the private key, if present and non-empty.
    pub fn private_key(self) -> Option<String> {
        self.nordlynx_private_key.filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    
    #[test]
    fn server_load_requires_number() {
        assert_eq!(server_load(&json!({ "load": 12 })), Some(12.0));
        assert_eq!(server_load(&json!({ "load": 7.5 })), Some(7.5));
        assert_eq!(server_load(&json!({ "load": "12" })), None);
        assert_eq!(server_load(&json!({ "name": "us1" })), None);
        assert_eq!(server_load(&json!(12)), None);
    }
    
    #[test]
    fn parse_rejects_non_objects() {
        assert!(ServerList::parse("[1, 2]").is_none());
        assert!(ServerList::parse("not json").is_none());
        assert!(ServerList::parse("{}").is_some());
    }
    
    #[test]
    fn retains_in_order() {
        let mut list = ServerList::parse(r#"{"servers":[
            {"name":"a","load":50},
            {"name":"b","load":7},
            {"name":"c"},
            {"name":"d","load":8},
            "e",
            {"name":"f","load":"90"}
        ]}"#).unwrap();
        
        assert!(list.retain_above_load(7.0));
        
        let names = list.servers().unwrap()
            .iter()
            .map(|server| server["name"].as_str().unwrap())
            .collect::<Vec<_>>();
        
        assert_eq!(names, vec!["a", "d"]);
    }
    
    #[test]
    fn retain_without_servers_is_noop() {
        let mut list = ServerList::parse(r#"{"servers":{"load":50},"count":1}"#).unwrap();
        
        assert!(!list.retain_above_load(7.0));
        assert_eq!(list.to_json().unwrap(), r#"{"servers":{"load":50},"count":1}"#);
    }
    
    #[test]
    fn keeps_key_order() {
        let list = ServerList::parse(r#"{"zeta":1,"servers":[],"alpha":2}"#).unwrap();
        
        assert_eq!(list.to_json().unwrap(), r#"{"zeta":1,"servers":[],"alpha":2}"#);
    }
    
    #[test]
    fn credentials_response_tolerates_wrong_type() {
        let response = serde_json::from_str::<CredentialsResponse>(r#"{"nordlynx_private_key":5}"#).unwrap();
        
        assert_eq!(response.private_key(), None);
        
        let response = serde_json::from_str::<CredentialsResponse>(r#"{"username":"u"}"#).unwrap();
        
        assert_eq!(response.private_key(), None);
        
        let response = serde_json::from_str::<CredentialsResponse>(r#"{"nordlynx_private_key":"k"}"#).unwrap();
        
        assert_eq!(response.private_key(), Some("k".to_string()));
    }
}
