use std::io;
use std::net::IpAddr;

use crate::domain::config::ResolverConfig;
use crate::domain::models::{NetworkInterface, ResolvedHostInfo};
use crate::features::resolution::ResolveError;
use crate::utils::{SystemInterfaces, SystemLocalHost};

/// Lists local network interfaces.
pub trait InterfaceSource: Send + Sync {
    fn interfaces(&self) -> io::Result<Vec<NetworkInterface>>;
}

/// Reports the local hostname and the address it resolves to.
pub trait LocalHostLookup: Send + Sync {
    fn host_name(&self) -> io::Result<String>;
    fn address_of(&self, host_name: &str) -> io::Result<IpAddr>;
}

/// Determines the IP address and hostname this process registers under.
pub struct HostResolver {
    config: ResolverConfig,
    interfaces: Box<dyn InterfaceSource>,
    local_host: Box<dyn LocalHostLookup>,
}

impl HostResolver {
    pub fn new(
        config: ResolverConfig,
        interfaces: impl InterfaceSource + 'static,
        local_host: impl LocalHostLookup + 'static,
    ) -> Self {
        Self {
            config,
            interfaces: Box::new(interfaces),
            local_host: Box::new(local_host),
        }
    }

    /// Resolver backed by the operating system.
    pub fn system(config: ResolverConfig) -> Self {
        Self::new(config, SystemInterfaces, SystemLocalHost)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Best-effort resolution. Failures are logged and yield
    /// [`ResolvedHostInfo::unknown`]; nothing is propagated.
    pub fn resolve(&self) -> ResolvedHostInfo {
        match self.try_resolve() {
            Ok(info) => info,
            Err(e) => {
                e.report();
                ResolvedHostInfo::unknown()
            }
        }
    }

    /// The pair is all-or-nothing: a hostname failure discards an
    /// interface address that was already usable.
    fn try_resolve(&self) -> Result<ResolvedHostInfo, ResolveError> {
        let host_name = self.local_host.host_name().map_err(ResolveError::HostLookup)?;

        let ip = match self.interface_address() {
            Ok(ip) => ip,
            Err(e) if e.falls_back() => {
                e.report();
                self.local_host
                    .address_of(&host_name)
                    .map_err(ResolveError::HostLookup)?
            }
            Err(e) => return Err(e),
        };

        Ok(ResolvedHostInfo::new(ip.to_string(), host_name))
    }

    /// First address on the preferred interface that passes the filter.
    pub fn interface_address(&self) -> Result<IpAddr, ResolveError> {
        let interfaces = self.interfaces.interfaces().map_err(ResolveError::Enumeration)?;
        select_address(&interfaces, &self.config)
    }
}

/// Picks the first interface named as preferred, then its first address
/// accepted by the filter. Platform order is kept for both.
pub fn select_address(
    interfaces: &[NetworkInterface],
    config: &ResolverConfig,
) -> Result<IpAddr, ResolveError> {
    let name = &config.preferred_interface;
    let iface = interfaces
        .iter()
        .find(|iface| &iface.name == name)
        .ok_or_else(|| ResolveError::InterfaceNotFound { name: name.clone() })?;

    iface
        .addresses
        .iter()
        .find(|addr| (config.address_filter)(*addr))
        .copied()
        .ok_or_else(|| ResolveError::NoQualifyingAddress { name: name.clone() })
}


#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::*;
    use crate::domain::config::routable_ipv4;

    fn resolver(interfaces: Vec<NetworkInterface>, local_host: FakeLocalHost) -> HostResolver {
        HostResolver::new(ResolverConfig::default(), FakeInterfaces(Ok(interfaces)), local_host)
    }

    #[test]
    fn test_skips_zero_address_and_picks_first_positive() {
        let resolver = resolver(
            vec![eth0(&[[0, 0, 0, 0], [10, 0, 0, 5]])],
            FakeLocalHost::ok("node-1", [192, 168, 1, 9]),
        );
        let info = resolver.resolve();
        assert_eq!(info, ResolvedHostInfo::new("10.0.0.5", "node-1"));
    }

    #[test]
    fn test_first_passing_candidate_wins() {
        let resolver = resolver(
            vec![eth0(&[[10, 0, 0, 5], [10, 0, 0, 6]])],
            FakeLocalHost::ok("node-1", [192, 168, 1, 9]),
        );
        assert_eq!(resolver.resolve().ip_address, "10.0.0.5");
    }

    #[test]
    fn test_missing_interface_falls_back_to_local_host() {
        let resolver = resolver(
            vec![NetworkInterface::new("wlan0", vec![IpAddr::from([10, 1, 1, 1])])],
            FakeLocalHost::ok("node-1", [192, 168, 1, 9]),
        );
        assert_eq!(resolver.resolve(), ResolvedHostInfo::new("192.168.1.9", "node-1"));
    }

    #[test]
    fn test_empty_interface_list_falls_back() {
        let resolver = resolver(vec![], FakeLocalHost::ok("node-1", [172, 16, 0, 2]));
        assert_eq!(resolver.resolve().ip_address, "172.16.0.2");
    }

    #[test]
    fn test_negative_first_byte_falls_back() {
        let resolver = resolver(
            vec![eth0(&[[200, 1, 2, 3]])],
            FakeLocalHost::ok("node-1", [192, 168, 1, 9]),
        );
        assert_eq!(resolver.resolve().ip_address, "192.168.1.9");
    }

    #[test]
    fn test_enumeration_failure_falls_back() {
        let resolver = HostResolver::new(
            ResolverConfig::default(),
            FakeInterfaces(Err(io::Error::other("ioctl failed"))),
            FakeLocalHost::ok("node-1", [192, 168, 1, 9]),
        );
        assert_eq!(resolver.resolve().ip_address, "192.168.1.9");
    }

    #[test]
    fn test_lookup_failure_yields_unknown() {
        let resolver = resolver(
            vec![],
            FakeLocalHost {
                host_name: Some("node-1"),
                address: None,
            },
        );
        assert_eq!(resolver.resolve(), ResolvedHostInfo::unknown());
    }

    #[test]
    fn test_hostname_failure_yields_unknown_even_with_interface_match() {
        let resolver = resolver(
            vec![eth0(&[[10, 0, 0, 5]])],
            FakeLocalHost {
                host_name: None,
                address: None,
            },
        );
        assert_eq!(resolver.resolve(), ResolvedHostInfo::unknown());
    }

    #[test]
    fn test_custom_interface_name() {
        let resolver = HostResolver::new(
            ResolverConfig::new("en0"),
            FakeInterfaces(Ok(vec![
                eth0(&[[10, 0, 0, 5]]),
                NetworkInterface::new("en0", vec![IpAddr::from([10, 9, 9, 9])]),
            ])),
            FakeLocalHost::ok("mac", [192, 168, 1, 9]),
        );
        assert_eq!(resolver.resolve().ip_address, "10.9.9.9");
    }

    #[test]
    fn test_replaceable_filter_admits_high_octet() {
        let resolver = HostResolver::new(
            ResolverConfig::default().with_address_filter(routable_ipv4),
            FakeInterfaces(Ok(vec![eth0(&[[127, 0, 0, 1], [200, 1, 2, 3]])])),
            FakeLocalHost::ok("node-1", [192, 168, 1, 9]),
        );
        assert_eq!(resolver.resolve().ip_address, "200.1.2.3");
    }

    #[test]
    fn test_fallthrough_errors_reach_local_host_lookup() {
        let resolver = resolver(
            vec![eth0(&[[0, 0, 0, 0]])],
            FakeLocalHost::ok("node-1", [192, 168, 1, 9]),
        );
        let err = resolver.interface_address().unwrap_err();
        assert!(err.falls_back());
        assert_eq!(resolver.resolve(), ResolvedHostInfo::new("192.168.1.9", "node-1"));
    }

    #[test]
    fn test_config_exposes_preferred_interface() {
        let resolver = HostResolver::new(
            ResolverConfig::new("en0"),
            FakeInterfaces(Ok(vec![])),
            FakeLocalHost::ok("mac", [192, 168, 1, 9]),
        );
        assert_eq!(resolver.config().preferred_interface, "en0");
    }

    #[test]
    fn test_select_address_errors() {
        let config = ResolverConfig::default();
        assert!(matches!(
            select_address(&[], &config),
            Err(ResolveError::InterfaceNotFound { .. })
        ));
        assert!(matches!(
            select_address(&[eth0(&[[0, 0, 0, 0]])], &config),
            Err(ResolveError::NoQualifyingAddress { .. })
        ));
    }
}
