use crate::Result;
use clap::{error::ErrorKind, Parser};
use council_configuration::Network;
use council_substrate::{
    parse_planck, Address, ProposalConfig, DEFAULT_LENGTH_BOUND, DEFAULT_THRESHOLD,
};
use std::num::ParseIntError;

const EXAMPLES: &str = "\
Examples:
  generate-council-proposal moonbeam 0x1234567890123456789012345678901234567890 1000000000000000000
  generate-council-proposal moonriver 0xabcdefabcdefabcdefabcdefabcdefabcdefabcd 2000000000000000000 5 15000
  generate-council-proposal moonbeam 0x1234567890123456789012345678901234567890 1000000000000000000 3 10000 wss://custom.moonbeam.network
  generate-council-proposal moonbeam 0x1234567890123456789012345678901234567890 1000000000000000000 3 10000 wss://custom.moonbeam.network 0xabcdefabcdefabcdefabcdefabcdefabcdefabcd

Environment:
  <NETWORK>_CONNECTION_URL  Endpoint override, e.g. MOONBEAM_CONNECTION_URL
  DEFAULT_CONNECTION_URL    Endpoint override for any network
  CONNECT_TIMEOUT_SECS      Give up connecting after this many seconds
  LOG_LEVEL / LOG_STYLE     Diagnostics on stderr (default: warn / full)";

/// Build a treasury spend wrapped in a treasury council proposal (and
/// optionally a proxy call) and print the encoded call for manual submission
#[derive(Parser, Debug)]
#[command(
    name = "generate-council-proposal",
    version,
    arg_required_else_help = true,
    allow_negative_numbers = true,
    after_help = EXAMPLES
)]
pub(crate) struct Args {
    /// "moonbeam" or "moonriver"
    pub network: Network,

    /// Ethereum-style address (0x...)
    pub recipient: Address,

    /// Amount in planck (smallest unit)
    #[arg(value_name = "AMOUNT_PLANCK", value_parser = parse_planck)]
    pub amount: u128,

    /// Council threshold
    #[arg(default_value_t = DEFAULT_THRESHOLD, value_parser = parse_threshold)]
    pub threshold: u32,

    /// Length bound
    #[arg(default_value_t = DEFAULT_LENGTH_BOUND, value_parser = parse_length_bound)]
    pub length_bound: u32,

    /// WebSocket endpoint (defaults to the network's public endpoint)
    pub ws_endpoint: Option<String>,

    /// Proxy address. If set, wraps the council call in proxy.proxy
    pub proxy_address: Option<String>,
}

/// Number of positionals below which any parse failure also prints the full
/// usage text
pub(crate) const REQUIRED_POSITIONALS: usize = 3;

/// Whether a parse failure should be followed by the full usage text.
/// `given` counts the positionals on the command line.
pub(crate) fn wants_full_usage(kind: ErrorKind, given: usize) -> bool {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => false,
        ErrorKind::MissingRequiredArgument => true,
        _ => given < REQUIRED_POSITIONALS,
    }
}

fn parse_u32_or(s: &str, default: u32) -> std::result::Result<u32, ParseIntError> {
    if s.is_empty() {
        Ok(default)
    } else {
        s.parse()
    }
}

/// Empty means "use the default"
fn parse_threshold(s: &str) -> std::result::Result<u32, ParseIntError> {
    parse_u32_or(s, DEFAULT_THRESHOLD)
}

fn parse_length_bound(s: &str) -> std::result::Result<u32, ParseIntError> {
    parse_u32_or(s, DEFAULT_LENGTH_BOUND)
}

impl Args {
    /// Explicit endpoint, if a non-empty one was given
    pub(crate) fn ws_endpoint(&self) -> Option<&str> {
        self.ws_endpoint.as_deref().filter(|url| !url.is_empty())
    }

    /// Validate the remaining arguments into a proposal config
    pub(crate) fn proposal_config(&self) -> Result<ProposalConfig> {
        let proxy = match self.proxy_address.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<Address>()?),
        };

        Ok(ProposalConfig {
            recipient: self.recipient,
            amount: self.amount,
            threshold: self.threshold,
            length_bound: self.length_bound,
            proxy,
        })
    }
}
