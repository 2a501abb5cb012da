//! Supported networks

use crate::{builtin::network_spec, ConfigurationError};
use std::{fmt, str::FromStr};

/// A chain the tool can build council proposals for
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Moonbeam (Polkadot parachain)
    Moonbeam,
    /// Moonriver (Kusama parachain)
    Moonriver,
}

impl Network {
    /// All supported networks
    pub const ALL: [Network; 2] = [Network::Moonbeam, Network::Moonriver];

    /// Lowercase network name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Moonbeam => "moonbeam",
            Network::Moonriver => "moonriver",
        }
    }

    /// Bundled specs for this network
    pub fn spec(&self) -> &'static NetworkSpec {
        network_spec(*self)
    }

    /// Well-known public endpoint used when nothing else is configured
    pub fn default_endpoint(&self) -> &'static str {
        &self.spec().default_endpoint
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moonbeam" => Ok(Self::Moonbeam),
            "moonriver" => Ok(Self::Moonriver),
            _ => Err(ConfigurationError::UnknownNetwork(s.to_owned())),
        }
    }
}

/// Static information about a network
#[derive(Debug, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    /// Network name
    pub name: Network,
    /// Human readable name
    pub display_name: String,
    /// Public websocket endpoint
    pub default_endpoint: String,
    /// Native token symbol
    pub token_symbol: String,
    /// Native token decimals
    pub decimals: u8,
}
