pub mod data_center;
pub mod host_info;
pub mod network_interface;
pub mod status;

pub use data_center::DataCenterInfo;
pub use host_info::ResolvedHostInfo;
pub use network_interface::NetworkInterface;
pub use status::InstanceStatus;
