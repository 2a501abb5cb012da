use council_configuration::ConfigurationError;
use council_substrate::{InputError, ProposalError};
use std::io::Error as IOError;

/// `Error` for the proposal generator
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Argument failed validation after parsing
    #[error("{0}")]
    Input(#[from] InputError),
    /// Environment configuration is unusable
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),
    /// Connecting or building calls failed
    #[error("{0}")]
    Proposal(#[from] ProposalError),
    /// Generic IO error
    #[error("BadIO: Error writing report: {0}")]
    BadIO(#[from] IOError),
    /// Log subscriber could not be installed
    #[error("Tracing: Unable to install log subscriber: {0}")]
    Tracing(String),
}

impl Error {
    /// Whether the failure was caught before any network contact
    pub(crate) fn is_validation(&self) -> bool {
        matches!(self, Error::Input(_) | Error::Configuration(_))
    }
}
