pub mod instance_config;

pub use instance_config::{BasicInstanceConfig, InstanceConfig};
