use std::collections::HashMap;

use crate::domain::config::{virtual_host_name, InstanceDefaults};
use crate::domain::models::{DataCenterInfo, InstanceStatus, ResolvedHostInfo};
use crate::features::resolution::HostResolver;

/// Configuration an instance registers with. Everything except the app
/// name and the resolved host identity has a default.
pub trait InstanceConfig: Send + Sync {
    fn app_name(&self) -> &str;

    fn host_info(&self) -> &ResolvedHostInfo;

    fn is_instance_enabled_on_init(&self) -> bool {
        InstanceDefaults::INSTANCE_ENABLED_ON_INIT
    }

    fn non_secure_port(&self) -> u16 {
        InstanceDefaults::NON_SECURE_PORT
    }

    fn secure_port(&self) -> u16 {
        InstanceDefaults::SECURE_PORT
    }

    fn is_non_secure_port_enabled(&self) -> bool {
        InstanceDefaults::NON_SECURE_PORT_ENABLED
    }

    fn is_secure_port_enabled(&self) -> bool {
        InstanceDefaults::SECURE_PORT_ENABLED
    }

    fn lease_renewal_interval_in_secs(&self) -> u32 {
        InstanceDefaults::LEASE_RENEWAL_INTERVAL_SECS
    }

    fn lease_expiration_duration_in_secs(&self) -> u32 {
        InstanceDefaults::LEASE_EXPIRATION_DURATION_SECS
    }

    fn virtual_host_name(&self) -> String {
        virtual_host_name(self.host_name(false), self.non_secure_port())
    }

    fn secure_virtual_host_name(&self) -> String {
        virtual_host_name(self.host_name(false), self.secure_port())
    }

    /// Auto-scaling group; none by default.
    fn asg_name(&self) -> Option<&str> {
        None
    }

    fn metadata_map(&self) -> Option<&HashMap<String, String>> {
        None
    }

    /// Hostname resolved at construction. `refresh` is accepted for
    /// compatibility and does not trigger a new resolution.
    fn host_name(&self, _refresh: bool) -> &str {
        &self.host_info().host_name
    }

    fn ip_address(&self) -> &str {
        &self.host_info().ip_address
    }

    fn data_center_info(&self) -> DataCenterInfo {
        DataCenterInfo::MyOwn
    }

    fn status(&self) -> InstanceStatus {
        InstanceStatus {
            app_name: self.app_name().to_string(),
            ip_address: self.ip_address().to_string(),
            host_name: self.host_name(false).to_string(),
            virtual_host_name: self.virtual_host_name(),
            secure_virtual_host_name: self.secure_virtual_host_name(),
            non_secure_port: self.non_secure_port(),
            non_secure_port_enabled: self.is_non_secure_port_enabled(),
            secure_port: self.secure_port(),
            secure_port_enabled: self.is_secure_port_enabled(),
            lease_renewal_interval_secs: self.lease_renewal_interval_in_secs(),
            lease_expiration_duration_secs: self.lease_expiration_duration_in_secs(),
            instance_enabled_on_init: self.is_instance_enabled_on_init(),
            data_center: self.data_center_info(),
        }
    }
}

/// Instance config that resolves its host identity once, when built.
#[derive(Debug, Clone)]
pub struct BasicInstanceConfig {
    app_name: String,
    host_info: ResolvedHostInfo,
    data_center: DataCenterInfo,
}

impl BasicInstanceConfig {
    pub fn new(app_name: impl Into<String>, resolver: &HostResolver) -> Self {
        Self::from_host_info(app_name, resolver.resolve())
    }

    pub fn from_host_info(app_name: impl Into<String>, host_info: ResolvedHostInfo) -> Self {
        let app_name = app_name.into();
        if !host_info.is_known() {
            log::warn!("Instance '{}' has no resolved host identity", app_name);
        }
        Self {
            app_name,
            host_info,
            data_center: DataCenterInfo::default(),
        }
    }

    pub fn with_data_center_info(mut self, data_center: DataCenterInfo) -> Self {
        self.data_center = data_center;
        self
    }
}

impl InstanceConfig for BasicInstanceConfig {
    fn app_name(&self) -> &str {
        &self.app_name
    }

    fn host_info(&self) -> &ResolvedHostInfo {
        &self.host_info
    }

    fn data_center_info(&self) -> DataCenterInfo {
        self.data_center
    }
}
