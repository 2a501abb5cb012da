use crate::{MetadataEncoder, ProposalError};
use council_configuration::ConnectionConf;
use subxt::{OnlineClient, SubstrateConfig};
use tracing::info;

/// Session with a node, used only for its runtime metadata
pub struct ProposalClient {
    client: OnlineClient<SubstrateConfig>,
    url: String,
}

impl std::fmt::Debug for ProposalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProposalClient {{ url: {} }}", self.url)
    }
}

impl ProposalClient {
    /// Connect to `conf.url` and wait until runtime metadata is available.
    /// A failed connection is returned immediately and never retried.
    #[tracing::instrument(err, skip(conf), fields(network = %conf.network, url = %conf.url))]
    pub async fn connect(conf: &ConnectionConf) -> Result<Self, ProposalError> {
        let connecting = OnlineClient::<SubstrateConfig>::from_url(&conf.url);

        let connected = match conf.timeout {
            Some(timeout) => tokio::time::timeout(timeout, connecting)
                .await
                .map_err(|_| ProposalError::ConnectTimeout {
                    url: conf.url.clone(),
                    secs: timeout.as_secs(),
                })?,
            None => connecting.await,
        };

        let client = connected.map_err(|source| ProposalError::Connection {
            url: conf.url.clone(),
            source,
        })?;

        info!(
            spec_version = client.runtime_version().spec_version,
            "Connected to {} network",
            conf.network.spec().display_name,
        );

        Ok(Self {
            client,
            url: conf.url.clone(),
        })
    }

    /// Endpoint this session is attached to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Encoder bound to the metadata fetched at connect time
    pub fn encoder(&self) -> MetadataEncoder {
        MetadataEncoder::new(self.client.metadata())
    }

    /// Close the session. The websocket is torn down once the last handle
    /// to the client is dropped.
    pub fn disconnect(self) {
        drop(self.client);
        info!(url = %self.url, "Disconnected");
    }
}
