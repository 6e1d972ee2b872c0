// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod abi;
pub mod chain;
pub mod config;
pub mod env;
pub mod gas;
pub mod network;
pub mod paths;
pub mod verification;
