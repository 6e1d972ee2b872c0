// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use export_abi::{export_abi, human_readable, ExportedAbi};

pub mod export_abi;
