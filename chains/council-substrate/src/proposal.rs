use crate::{calls, Address, CallEncoder, CallSpec, ProposalError};
use subxt::ext::sp_core::hashing::blake2_256;
use tracing::{info, warn};

/// Council approvals required when none is given
pub const DEFAULT_THRESHOLD: u32 = 3;
/// Length bound used when none is given
pub const DEFAULT_LENGTH_BOUND: u32 = 10_000;

/// Everything needed to build a proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalConfig {
    /// Spend beneficiary
    pub recipient: Address,
    /// Spend amount in planck
    pub amount: u128,
    /// Approvals required in the council
    pub threshold: u32,
    /// Maximum encoded length of the proposed call
    pub length_bound: u32,
    /// Account the council call is dispatched on behalf of, if any
    pub proxy: Option<Address>,
}

impl ProposalConfig {
    /// Config with default threshold and length bound, no proxy
    pub fn new(recipient: Address, amount: u128) -> Self {
        Self {
            recipient,
            amount,
            threshold: DEFAULT_THRESHOLD,
            length_bound: DEFAULT_LENGTH_BOUND,
            proxy: None,
        }
    }
}

/// An encoded call and its hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallInfo {
    /// `Pallet.call`
    pub label: String,
    /// SCALE encoded call data
    pub encoded: Vec<u8>,
    /// blake2-256 of `encoded`
    pub hash: [u8; 32],
}

impl CallInfo {
    /// Encode `call` and hash the result
    pub fn encode<E: CallEncoder + ?Sized>(
        encoder: &E,
        call: &CallSpec,
    ) -> Result<Self, ProposalError> {
        let encoded = encoder.encode_call(call)?;
        let hash = blake2_256(&encoded);
        Ok(Self {
            label: call.label(),
            encoded,
            hash,
        })
    }

    /// `0x` prefixed encoded call
    pub fn encoded_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.encoded))
    }

    /// `0x` prefixed call hash
    pub fn hash_hex(&self) -> String {
        format!("0x{}", hex::encode(self.hash))
    }

    /// Encoded length in bytes
    pub fn encoded_len(&self) -> usize {
        self.encoded.len()
    }
}

/// The nested calls making up one proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallBundle {
    /// `Treasury.spend`
    pub treasury: CallInfo,
    /// `TreasuryCouncilCollective.propose` wrapping `treasury`
    pub council: CallInfo,
    /// `Proxy.proxy` wrapping `council`, when a proxy was requested
    pub proxy: Option<CallInfo>,
}

impl CallBundle {
    /// The outermost call, i.e. what gets submitted
    pub fn final_call(&self) -> &CallInfo {
        self.proxy.as_ref().unwrap_or(&self.council)
    }

    /// Whether a proxy layer was added
    pub fn is_proxy(&self) -> bool {
        self.proxy.is_some()
    }
}

/// Build the spend, wrap it in a council proposal and, if requested, in a
/// proxy call. Only `encoder` touches the runtime.
pub fn build_proposal<E: CallEncoder + ?Sized>(
    config: &ProposalConfig,
    encoder: &E,
) -> Result<CallBundle, ProposalError> {
    let spend = calls::treasury_spend(config.amount, &config.recipient);
    let treasury = CallInfo::encode(encoder, &spend)?;
    info!(hash = %treasury.hash_hex(), "Built inner treasury.spend call");

    // the runtime rejects a proposal longer than its length bound at close
    if treasury.encoded_len() > config.length_bound as usize {
        warn!(
            encoded_len = treasury.encoded_len(),
            length_bound = config.length_bound,
            "Length bound is smaller than the encoded proposal",
        );
    }

    let propose = calls::council_propose(config.threshold, &spend, config.length_bound);
    let council = CallInfo::encode(encoder, &propose)?;
    info!(hash = %council.hash_hex(), "Built council.propose call");

    let proxy = match &config.proxy {
        Some(real) => {
            let wrapped = calls::proxy(real, &propose);
            let proxy = CallInfo::encode(encoder, &wrapped)?;
            info!(hash = %proxy.hash_hex(), real = %real, "Built proxy-wrapped call");
            Some(proxy)
        }
        None => None,
    };

    Ok(CallBundle {
        treasury,
        council,
        proxy,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{calls::PROXY_PALLET, MockCallEncoder};
    use mockall::{predicate::function, Sequence};

    /// Deterministic stand-in for runtime metadata
    struct DebugEncoder;

    impl CallEncoder for DebugEncoder {
        fn encode_call(&self, call: &CallSpec) -> Result<Vec<u8>, ProposalError> {
            Ok(format!("{:?}", call.to_runtime_call()).into_bytes())
        }
    }

    fn config() -> ProposalConfig {
        ProposalConfig::new(
            "0x1234567890123456789012345678901234567890".parse().unwrap(),
            1_000_000_000_000_000_000,
        )
    }

    fn proxy_address() -> Address {
        "0xAbCdEfabcdefABCDEFabcdefabcdefabcdefABCD".parse().unwrap()
    }

    #[test]
    fn it_defaults_threshold_and_length_bound() {
        let config = config();
        assert_eq!(config.threshold, 3);
        assert_eq!(config.length_bound, 10_000);
        assert_eq!(config.proxy, None);
    }

    #[test]
    fn encoding_is_deterministic() {
        let first = build_proposal(&config(), &DebugEncoder).unwrap();
        let second = build_proposal(&config(), &DebugEncoder).unwrap();

        assert_eq!(first.treasury.encoded_hex(), second.treasury.encoded_hex());
        assert_eq!(first.treasury.hash, second.treasury.hash);
        assert_eq!(first, second);
    }

    #[test]
    fn without_proxy_the_council_call_is_final() {
        let bundle = build_proposal(&config(), &DebugEncoder).unwrap();

        assert!(!bundle.is_proxy());
        assert_eq!(bundle.final_call(), &bundle.council);
        assert_eq!(bundle.treasury.label, "Treasury.spend");
        assert_eq!(bundle.council.label, "TreasuryCouncilCollective.propose");
    }

    #[test]
    fn proxy_adds_exactly_one_layer_and_changes_final_hash() {
        let plain = build_proposal(&config(), &DebugEncoder).unwrap();

        let mut proxied_config = config();
        proxied_config.proxy = Some(proxy_address());
        let proxied = build_proposal(&proxied_config, &DebugEncoder).unwrap();

        assert!(proxied.is_proxy());
        assert_eq!(proxied.final_call().label, "Proxy.proxy");
        assert_ne!(proxied.final_call().hash, plain.final_call().hash);

        // inner layers are untouched by the wrapper
        assert_eq!(proxied.treasury, plain.treasury);
        assert_eq!(proxied.council, plain.council);

        let encoded = String::from_utf8(proxied.final_call().encoded.clone()).unwrap();
        assert_eq!(encoded.matches(PROXY_PALLET).count(), 1);
    }

    #[test]
    fn hash_is_blake2_256_of_the_encoding() {
        let mut encoder = MockCallEncoder::new();
        encoder
            .expect_encode_call()
            .returning(|_| Ok(vec![0x00, 0x01, 0x02]));

        let info = CallInfo::encode(&encoder, &calls::treasury_spend(1, &proxy_address())).unwrap();
        assert_eq!(info.encoded_hex(), "0x000102");
        assert_eq!(info.hash, blake2_256(&[0x00, 0x01, 0x02]));
        assert_eq!(info.hash_hex().len(), 2 + 64);
    }

    #[test]
    fn it_builds_layers_in_order() {
        let mut encoder = MockCallEncoder::new();
        let mut seq = Sequence::new();

        for (pallet, byte) in [
            ("Treasury", 1u8),
            ("TreasuryCouncilCollective", 2u8),
            ("Proxy", 3u8),
        ] {
            encoder
                .expect_encode_call()
                .with(function(move |call: &CallSpec| call.pallet() == pallet))
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| Ok(vec![byte]));
        }

        let mut config = config();
        config.proxy = Some(proxy_address());
        let bundle = build_proposal(&config, &encoder).unwrap();

        assert_eq!(bundle.treasury.encoded, vec![1]);
        assert_eq!(bundle.council.encoded, vec![2]);
        assert_eq!(bundle.final_call().encoded, vec![3]);
    }

    #[test]
    fn construction_failure_propagates() {
        let mut encoder = MockCallEncoder::new();
        encoder
            .expect_encode_call()
            .with(function(|call: &CallSpec| call.pallet() == "Treasury"))
            .times(1)
            .returning(|_| Ok(vec![1]));
        encoder
            .expect_encode_call()
            .with(function(|call: &CallSpec| {
                call.pallet() == "TreasuryCouncilCollective"
            }))
            .times(1)
            .returning(|call| {
                Err(ProposalError::Encoding {
                    call: call.label(),
                    reason: "Pallet not found".to_owned(),
                })
            });

        let mut config = config();
        config.proxy = Some(proxy_address());

        let err = build_proposal(&config, &encoder).unwrap_err();
        assert_matches!(
            err,
            ProposalError::Encoding { ref call, .. } if call == "TreasuryCouncilCollective.propose"
        );
    }

    #[test]
    fn short_length_bound_still_builds() {
        let mut config = config();
        config.length_bound = 1;

        let bundle = build_proposal(&config, &DebugEncoder).unwrap();
        assert!(bundle.treasury.encoded_len() > 1);
    }
}
