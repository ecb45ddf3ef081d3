//! Traits (ports) implemented outside the domain layer

mod connection;
mod lookups;

pub use connection::ConnectionInfoProvider;
pub use lookups::{DataLookup, PlayerLookup};
