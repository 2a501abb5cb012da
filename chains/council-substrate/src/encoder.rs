use crate::{CallSpec, ProposalError};
use std::fmt;
use subxt::{tx::TxPayload, Metadata};

/// Turns a [`CallSpec`] into SCALE encoded call data
/// (pallet index, call index, fields).
#[cfg_attr(test, mockall::automock)]
pub trait CallEncoder {
    /// Encode `call`
    fn encode_call(&self, call: &CallSpec) -> Result<Vec<u8>, ProposalError>;
}

/// Encodes calls against the metadata of a live runtime
#[derive(Clone)]
pub struct MetadataEncoder {
    metadata: Metadata,
}

impl MetadataEncoder {
    /// Wrap runtime metadata
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }
}

impl fmt::Debug for MetadataEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataEncoder").finish_non_exhaustive()
    }
}

impl CallEncoder for MetadataEncoder {
    fn encode_call(&self, call: &CallSpec) -> Result<Vec<u8>, ProposalError> {
        let payload = subxt::dynamic::tx(call.pallet(), call.call(), call.field_values());

        let mut bytes = Vec::new();
        payload
            .encode_call_data(&self.metadata, &mut bytes)
            .map_err(|e| ProposalError::Encoding {
                call: call.label(),
                reason: e.to_string(),
            })?;

        tracing::debug!(call = %call.label(), len = bytes.len(), "Encoded call");
        Ok(bytes)
    }
}
