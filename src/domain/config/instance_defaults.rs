/// Fallback values for an instance registration. Implementors of
/// [`InstanceConfig`](crate::InstanceConfig) only need to supply identity.
pub struct InstanceDefaults;

impl InstanceDefaults {
    pub const LEASE_RENEWAL_INTERVAL_SECS: u32 = 30;
    pub const LEASE_EXPIRATION_DURATION_SECS: u32 = 90;
    pub const INSTANCE_ENABLED_ON_INIT: bool = false;

    pub const NON_SECURE_PORT: u16 = 80;
    pub const NON_SECURE_PORT_ENABLED: bool = true;
    pub const SECURE_PORT: u16 = 443;
    pub const SECURE_PORT_ENABLED: bool = false;

    pub const PORT_SEPARATOR: &'static str = ":";
}

/// `host:port` form used as a virtual hostname.
pub fn virtual_host_name(host_name: &str, port: u16) -> String {
    format!("{}{}{}", host_name, InstanceDefaults::PORT_SEPARATOR, port)
}
