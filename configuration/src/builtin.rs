//! Network specs bundled with the lib

use std::collections::HashMap;

use eyre::Context;
use once_cell::sync::OnceCell;

use crate::{Network, NetworkSpec};

static NETWORKS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/configs/networks.json"
));
static BUILTINS: OnceCell<HashMap<Network, NetworkSpec>> = OnceCell::new();

fn deser(json: &str) -> eyre::Result<HashMap<Network, NetworkSpec>> {
    serde_json::from_str(json).wrap_err("Configuration networks.json is malformed")
}

/// Get the bundled spec for a network
pub fn network_spec(network: Network) -> &'static NetworkSpec {
    let builtins = BUILTINS.get_or_init(|| match deser(NETWORKS_JSON) {
        Ok(specs) => specs,
        Err(report) => panic!("{:?}", report),
    });

    match builtins.get(&network) {
        Some(spec) => spec,
        None => panic!("networks.json has no entry for {}", network),
    }
}
