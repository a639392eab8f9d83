use std::fmt;
use std::net::IpAddr;

/// Decides whether a bound address may be used as the instance IP.
pub type AddressFilter = fn(&IpAddr) -> bool;

/// Settings for interface-scoped host resolution.
#[derive(Clone)]
pub struct ResolverConfig {
    pub preferred_interface: String,
    pub address_filter: AddressFilter,
}

impl ResolverConfig {
    pub const DEFAULT_INTERFACE: &'static str = "eth0";
    pub const INTERFACE_ENV_VAR: &'static str = "INSTANCE_PREFERRED_INTERFACE";

    pub fn new(preferred_interface: impl Into<String>) -> Self {
        Self {
            preferred_interface: preferred_interface.into(),
            ..Self::default()
        }
    }

    /// Reads the preferred interface from `INSTANCE_PREFERRED_INTERFACE`,
    /// keeping the default when it is unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(Self::INTERFACE_ENV_VAR) {
            Ok(name) if !name.trim().is_empty() => Self::new(name.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_address_filter(mut self, filter: AddressFilter) -> Self {
        self.address_filter = filter;
        self
    }
}

impl fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("preferred_interface", &self.preferred_interface)
            .finish_non_exhaustive()
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            preferred_interface: Self::DEFAULT_INTERFACE.to_string(),
            address_filter: positive_first_octet,
        }
    }
}

/// Legacy selection rule: the first raw byte, read as a signed 8-bit
/// integer, must be positive. Admits first octets 1..=127 for IPv4 and the
/// same leading byte range for IPv6.
pub fn positive_first_octet(addr: &IpAddr) -> bool {
    let first = match addr {
        IpAddr::V4(v4) => v4.octets().first().copied(),
        IpAddr::V6(v6) => v6.octets().first().copied(),
    };
    matches!(first, Some(byte) if (byte as i8) > 0)
}

/// Stricter rule: IPv4 only, excluding loopback, link-local, multicast,
/// broadcast and unspecified addresses.
pub fn routable_ipv4(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => {
            !v4.is_loopback()
                && !v4.is_link_local()
                && !v4.is_multicast()
                && !v4.is_broadcast()
                && !v4.is_unspecified()
        }
        IpAddr::V6(_) => false,
    }
}
