use serde::Serialize;

/// IP address and hostname identifying this process on the network.
///
/// Both fields are empty when resolution failed; callers treat an empty
/// string as "identity unknown".
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedHostInfo {
    pub ip_address: String,
    pub host_name: String,
}

impl ResolvedHostInfo {
    pub fn new(ip_address: impl Into<String>, host_name: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            host_name: host_name.into(),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_known(&self) -> bool {
        !self.ip_address.is_empty() && !self.host_name.is_empty()
    }
}
