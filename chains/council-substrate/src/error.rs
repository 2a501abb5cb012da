use subxt::Error as SubxtError;

/// Errors raised while connecting or building calls
#[derive(Debug, thiserror::Error)]
pub enum ProposalError {
    /// Endpoint unreachable or metadata could not be fetched
    #[error("Connection: Unable to connect to {url}: {source}")]
    Connection {
        /// Endpoint we tried
        url: String,
        /// Underlying provider error
        #[source]
        source: SubxtError,
    },
    /// Connection did not become ready in time
    #[error("ConnectTimeout: No runtime metadata from {url} after {secs}s")]
    ConnectTimeout {
        /// Endpoint we tried
        url: String,
        /// Configured bound
        secs: u64,
    },
    /// Runtime metadata does not admit the assumed call shape
    #[error("Encoding: Unable to encode {call} against runtime metadata: {reason}")]
    Encoding {
        /// `Pallet.call` being encoded
        call: String,
        /// Why encoding failed
        reason: String,
    },
}
