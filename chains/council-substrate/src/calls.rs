use crate::Address;
use subxt::ext::scale_value::Value;

/// Treasury pallet name
pub const TREASURY_PALLET: &str = "Treasury";
/// Treasury council collective pallet name
pub const COUNCIL_PALLET: &str = "TreasuryCouncilCollective";
/// Proxy pallet name
pub const PROXY_PALLET: &str = "Proxy";

/// A runtime call described by pallet, call name and fields in metadata
/// order. Encoding is left to a [`crate::CallEncoder`].
#[derive(Debug, Clone, PartialEq)]
pub struct CallSpec {
    pallet: &'static str,
    call: &'static str,
    fields: Vec<(&'static str, Value)>,
}

impl CallSpec {
    /// Describe `pallet.call(fields..)`
    pub fn new(
        pallet: &'static str,
        call: &'static str,
        fields: Vec<(&'static str, Value)>,
    ) -> Self {
        Self {
            pallet,
            call,
            fields,
        }
    }

    /// Pallet name
    pub fn pallet(&self) -> &'static str {
        self.pallet
    }

    /// Call name within the pallet
    pub fn call(&self) -> &'static str {
        self.call
    }

    /// Named fields, in metadata order
    pub fn fields(&self) -> &[(&'static str, Value)] {
        &self.fields
    }

    /// `Pallet.call`, used in logs and errors
    pub fn label(&self) -> String {
        format!("{}.{}", self.pallet, self.call)
    }

    /// Field values in order, as expected by `subxt::dynamic::tx`
    pub fn field_values(&self) -> Vec<Value> {
        self.fields.iter().map(|(_, value)| value.clone()).collect()
    }

    /// This call as a value of the runtime's outer call enum, for embedding
    /// inside another call.
    pub fn to_runtime_call(&self) -> Value {
        Value::unnamed_variant(
            self.pallet,
            vec![Value::named_variant(
                self.call,
                self.fields
                    .iter()
                    .map(|(name, value)| (*name, value.clone()))
                    .collect::<Vec<_>>(),
            )],
        )
    }
}

fn unit_variant(name: &str) -> Value {
    Value::unnamed_variant(name, Vec::<Value>::new())
}

fn account(address: &Address) -> Value {
    Value::from_bytes(address.as_bytes())
}

/// `Treasury.spend` of the native asset to `beneficiary`, payable
/// immediately.
pub fn treasury_spend(amount: u128, beneficiary: &Address) -> CallSpec {
    CallSpec::new(
        TREASURY_PALLET,
        "spend",
        vec![
            ("asset_kind", unit_variant("Native")),
            ("amount", Value::u128(amount)),
            ("beneficiary", account(beneficiary)),
            ("valid_from", unit_variant("None")),
        ],
    )
}

/// `TreasuryCouncilCollective.propose` embedding the whole of `proposal`
pub fn council_propose(threshold: u32, proposal: &CallSpec, length_bound: u32) -> CallSpec {
    CallSpec::new(
        COUNCIL_PALLET,
        "propose",
        vec![
            ("threshold", Value::u128(threshold as u128)),
            ("proposal", proposal.to_runtime_call()),
            ("length_bound", Value::u128(length_bound as u128)),
        ],
    )
}

/// `Proxy.proxy` dispatching `call` on behalf of `real`, with no proxy type
/// filter.
pub fn proxy(real: &Address, call: &CallSpec) -> CallSpec {
    CallSpec::new(
        PROXY_PALLET,
        "proxy",
        vec![
            ("real", account(real)),
            ("force_proxy_type", unit_variant("None")),
            ("call", call.to_runtime_call()),
        ],
    )
}
