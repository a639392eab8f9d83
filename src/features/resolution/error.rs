use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("interface '{name}' not found")]
    InterfaceNotFound { name: String },

    #[error("interface '{name}' has no qualifying address")]
    NoQualifyingAddress { name: String },

    #[error("failed to enumerate network interfaces: {0}")]
    Enumeration(#[source] io::Error),

    #[error("cannot get host info: {0}")]
    HostLookup(#[source] io::Error),
}

impl ResolveError {
    /// True when resolution continues with the local-host lookup.
    pub fn falls_back(&self) -> bool {
        !matches!(self, ResolveError::HostLookup(_))
    }

    /// Logs the failure at the level its kind warrants.
    pub fn report(&self) {
        match self {
            ResolveError::InterfaceNotFound { .. } | ResolveError::NoQualifyingAddress { .. } => {
                log::debug!("{}, using local host address", self)
            }
            ResolveError::Enumeration(_) => log::warn!("{}, using local host address", self),
            ResolveError::HostLookup(_) => log::error!("{}", self),
        }
    }
}
