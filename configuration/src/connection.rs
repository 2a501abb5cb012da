use crate::{network_or_default_from_env, ConfigurationError, Network};
use std::time::Duration;

/// Env var suffix for endpoint overrides, as in `MOONBEAM_CONNECTION_URL`
pub const CONNECTION_URL_VAR: &str = "CONNECTION_URL";

/// Env var bounding the initial connection
pub const CONNECT_TIMEOUT_VAR: &str = "CONNECT_TIMEOUT_SECS";

/// Where and how to reach a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConf {
    /// Network being targeted
    pub network: Network,
    /// Websocket endpoint
    pub url: String,
    /// Upper bound on connecting and fetching metadata. `None` waits forever
    pub timeout: Option<Duration>,
}

impl ConnectionConf {
    /// Resolve the endpoint for `network`.
    ///
    /// An explicit endpoint wins, then `<NETWORK>_CONNECTION_URL`, then
    /// `DEFAULT_CONNECTION_URL`, then the bundled public endpoint.
    pub fn from_env(
        network: Network,
        explicit_url: Option<&str>,
    ) -> Result<Self, ConfigurationError> {
        let url = explicit_url
            .map(ToOwned::to_owned)
            .or_else(|| network_or_default_from_env(network.as_str(), CONNECTION_URL_VAR))
            .unwrap_or_else(|| network.default_endpoint().to_owned());

        let timeout = match std::env::var(CONNECT_TIMEOUT_VAR) {
            Ok(secs) if !secs.trim().is_empty() => Some(Duration::from_secs(
                secs.trim()
                    .parse()
                    .map_err(|_| ConfigurationError::BadTimeout(secs.clone()))?,
            )),
            _ => None,
        };

        Ok(Self {
            network,
            url,
            timeout,
        })
    }
}
