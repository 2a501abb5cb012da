use council_configuration::Network;
use council_substrate::{CallBundle, CallInfo, ProposalConfig};
use std::io::{self, Write};

const APPS_URL: &str = "https://polkadot.js.org/apps/";

/// Writes the human readable report
pub(crate) struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    /// Run parameters, printed before connecting
    pub(crate) fn header(&mut self, network: Network, config: &ProposalConfig) -> io::Result<()> {
        writeln!(self.out, "=== Council Proposal Generator ===")?;
        writeln!(self.out, "Network: {}", network)?;
        writeln!(self.out, "Recipient: {}", config.recipient)?;
        writeln!(self.out, "Amount: {} planck", config.amount)?;
        writeln!(self.out, "Threshold: {}", config.threshold)?;
        writeln!(self.out, "Length Bound: {}", config.length_bound)?;
        if let Some(proxy) = &config.proxy {
            writeln!(self.out, "Proxy Address: {}", proxy)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn layer(&mut self, title: &str, call: &CallInfo) -> io::Result<()> {
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "Call Hash: {}", call.hash_hex())?;
        writeln!(self.out, "Encoded: {}", call.encoded_hex())?;
        writeln!(self.out)
    }

    /// One section per call layer, innermost first
    pub(crate) fn layers(&mut self, bundle: &CallBundle) -> io::Result<()> {
        self.layer("Inner treasury.spend call:", &bundle.treasury)?;
        self.layer("Outer council.propose call:", &bundle.council)?;
        if let Some(proxy) = &bundle.proxy {
            self.layer("Proxy-wrapped call:", proxy)?;
        }
        Ok(())
    }

    /// Hashes of the inner layers and the payload to submit
    pub(crate) fn summary(
        &mut self,
        network: Network,
        bundle: &CallBundle,
        endpoint: &str,
    ) -> io::Result<()> {
        let final_call = bundle.final_call();

        writeln!(self.out, "=== Summary ===")?;
        writeln!(self.out, "Network: {}", network)?;
        writeln!(self.out, "Treasury Call Hash: {}", bundle.treasury.hash_hex())?;
        writeln!(self.out, "Council Call Hash: {}", bundle.council.hash_hex())?;
        if bundle.is_proxy() {
            writeln!(self.out, "Full Encoded Call (Proxy):")?;
        } else {
            writeln!(self.out, "Full Encoded Call:")?;
        }
        writeln!(self.out, "{}", final_call.encoded_hex())?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Copy the \"Full Encoded Call\" above and use it in Polkadot.js Apps"
        )?;
        writeln!(self.out, "{}", apps_decode_link(endpoint, final_call))?;
        self.out.flush()
    }
}

/// Polkadot.js Apps link that opens `call` in the extrinsic decoder
pub(crate) fn apps_decode_link(endpoint: &str, call: &CallInfo) -> String {
    let rpc: String = url::form_urlencoded::byte_serialize(endpoint.as_bytes()).collect();
    format!(
        "{}?rpc={}#/extrinsics/decode/{}",
        APPS_URL,
        rpc,
        call.encoded_hex()
    )
}
