use std::sync::Arc;

use anyhow::Result;

use instance_identity::domain::config::StatusConfig;
use instance_identity::{status_server, BasicInstanceConfig, HostResolver, InstanceConfig, ResolverConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let resolver = HostResolver::system(ResolverConfig::from_env());
    log::info!(
        "Resolving host identity (preferred interface: {})",
        resolver.config().preferred_interface
    );

    let app_name = std::env::var(StatusConfig::APP_NAME_ENV_VAR)
        .unwrap_or_else(|_| StatusConfig::DEFAULT_APP_NAME.to_string());
    let config = BasicInstanceConfig::new(app_name, &resolver);

    log::info!(
        "Instance {} identity: ip={} host={} vhost={}",
        config.app_name(),
        config.ip_address(),
        config.host_name(false),
        config.virtual_host_name()
    );

    status_server::run(Arc::new(config)).await
}
