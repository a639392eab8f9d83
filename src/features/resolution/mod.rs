pub mod error;
pub mod host_resolver;

pub use error::ResolveError;
pub use host_resolver::{select_address, HostResolver, InterfaceSource, LocalHostLookup};
