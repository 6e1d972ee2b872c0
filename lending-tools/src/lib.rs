// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for working with the lending contracts toolchain.
//!
//! The centerpiece is [`BuildConfig`], the single record the compiler, signing, verification,
//! gas reporting and ABI export collaborators read at start-up. It is assembled from an
//! [`Env`](core::env::Env) and never fails to load: missing variables degrade to blank values.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use core::config::BuildConfig;
pub use error::{Error, Result};
pub use ops::export_abi::Exporter;
