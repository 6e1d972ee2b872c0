// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The default project root, relative to the working directory.
pub const DEFAULT_ROOT: &str = ".";
