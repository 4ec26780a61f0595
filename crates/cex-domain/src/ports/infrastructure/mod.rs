//! Infrastructure Service Ports

/// Authorization port
pub mod authorization;

pub use authorization::Authorizer;
