//! Construction of council treasury proposals for Moonbeam-family chains

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod types;
pub use types::*;

/// Call shapes for the pallets involved in a proposal
pub mod calls;
pub use calls::CallSpec;

mod encoder;
pub use encoder::*;

mod client;
pub use client::*;

mod proposal;
pub use proposal::*;

mod error;
pub use error::*;
