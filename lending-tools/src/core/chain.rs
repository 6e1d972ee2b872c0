// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// A chain the toolchain knows how to talk to or verify on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chain {
    /// Name of the network entry in the build configuration, if one targets this chain.
    pub network: Option<&'static str>,
    pub id: u64,
    /// Name the block-explorer verification plugin uses for this chain's API key.
    pub explorer: &'static str,
}

pub const ROPSTEN: Chain = Chain {
    network: Some("ropsten"),
    id: 3,
    explorer: "ropsten",
};

pub const MUMBAI: Chain = Chain {
    network: Some("mumbai"),
    id: 80_001,
    explorer: "polygonMumbai",
};

pub const COSTON: Chain = Chain {
    network: Some("coston"),
    id: 16,
    explorer: "coston",
};

pub const POLYGON: Chain = Chain {
    network: None,
    id: 137,
    explorer: "polygon",
};

pub const BSC_TESTNET: Chain = Chain {
    network: None,
    id: 97,
    explorer: "bscTestnet",
};

pub const KNOWN_CHAINS: &[Chain] = &[ROPSTEN, MUMBAI, COSTON, POLYGON, BSC_TESTNET];

impl Chain {
    /// Looks up the chain a configured network targets.
    pub fn by_network(name: &str) -> Option<Chain> {
        KNOWN_CHAINS
            .iter()
            .find(|chain| chain.network == Some(name))
            .copied()
    }

    pub fn by_id(id: u64) -> Option<Chain> {
        KNOWN_CHAINS.iter().find(|chain| chain.id == id).copied()
    }
}
