mod instance_defaults;
mod resolver_config;
mod status_config;

pub use instance_defaults::{virtual_host_name, InstanceDefaults};
pub use resolver_config::{positive_first_octet, routable_ipv4, AddressFilter, ResolverConfig};
pub use status_config::StatusConfig;
