use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Technology identifiers used by the NordVPN API to filter servers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum ServerTechnology {
    Ikev2 = 1,
    OpenvpnUdp = 3,
    OpenvpnTcp = 5,
    /// NordLynx.
    WireguardUdp = 35,
}

impl ServerTechnology {
    /// The numeric id as it appears in query filters.
    pub fn id(self) -> u32 {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn nordlynx_is_35() {
        assert_eq!(ServerTechnology::WireguardUdp.id(), 35);
        assert_eq!(ServerTechnology::try_from(35).unwrap(), ServerTechnology::WireguardUdp);
    }
    
    #[test]
    fn unknown_id_is_rejected() {
        assert!(ServerTechnology::try_from(2).is_err());
    }
}
