use serde::Serialize;

use super::DataCenterInfo;

/// Snapshot served by the status endpoint.
#[derive(Serialize, Debug, Clone)]
pub struct InstanceStatus {
    pub app_name: String,
    pub ip_address: String,
    pub host_name: String,
    pub virtual_host_name: String,
    pub secure_virtual_host_name: String,
    pub non_secure_port: u16,
    pub non_secure_port_enabled: bool,
    pub secure_port: u16,
    pub secure_port_enabled: bool,
    pub lease_renewal_interval_secs: u32,
    pub lease_expiration_duration_secs: u32,
    pub instance_enabled_on_init: bool,
    pub data_center: DataCenterInfo,
}
