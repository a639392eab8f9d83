//! Default instance settings and host identity resolution for
//! service-registration clients.

pub mod domain;
pub mod features;
pub mod status_server;
pub mod utils;

pub use domain::config::{InstanceDefaults, ResolverConfig};
pub use domain::models::{DataCenterInfo, ResolvedHostInfo};
pub use features::instance::{BasicInstanceConfig, InstanceConfig};
pub use features::resolution::{HostResolver, ResolveError};
