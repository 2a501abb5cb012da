//! Council proposal configuration crate

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod logging;
pub use logging::*;

pub mod network;
pub use network::*;

pub mod builtin;
pub use builtin::*;

mod connection;
pub use connection::*;

mod utils;
pub use utils::*;

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Network name is not one we ship defaults for
    #[error("UnknownNetwork: Network must be \"moonbeam\" or \"moonriver\", got \"{0}\"")]
    UnknownNetwork(String),
    /// Timeout env var is not a whole number of seconds
    #[error("BadTimeout: CONNECT_TIMEOUT_SECS must be a whole number of seconds, got \"{0}\"")]
    BadTimeout(String),
}
