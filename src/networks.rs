//! Known blockchain networks and their explorer/icon lookups.
//!
//! The directory lists facilitator addresses on a small, closed set of networks. Each
//! [`Network`] has a static [`NetworkInfo`] entry carrying its wire name, CAIP-2 chain
//! identifier, the block explorer used to inspect addresses, and the icon file shipped
//! with the generated site.
//!
//! CAIP-2 is a standard for identifying blockchain networks in a chain-agnostic way:
//! `namespace:reference`, e.g. `eip155:8453` for Base.
//! See <https://chainagnostic.org/CAIPs/caip-2>.
//!
//! # Examples
//!
//! ```
//! use x402_directory::networks::Network;
//!
//! let base = Network::Base;
//! assert_eq!(base.chain_id(), "eip155:8453");
//! assert_eq!(base.explorer_name(), "BaseScan");
//! assert_eq!(
//!     base.explorer_url("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
//!     "https://basescan.org/address/0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Networks a facilitator can list addresses on.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Network {
    /// Base mainnet (chain ID 8453).
    #[serde(rename = "base")]
    Base,
    /// Polygon mainnet (chain ID 137).
    #[serde(rename = "polygon")]
    Polygon,
    /// Solana mainnet.
    #[serde(rename = "solana")]
    Solana,
}

/// A block explorer able to display an on-chain address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explorer {
    /// Brand name shown in link text (e.g., "BaseScan").
    pub name: &'static str,
    /// Origin of the explorer, without a trailing slash.
    pub base_url: &'static str,
}

impl Explorer {
    /// Link to the explorer page of `address`. The address is appended as is.
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.base_url, address)
    }
}

/// Static facts about a known network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub network: Network,
    /// Wire name (e.g., "base", "solana").
    pub name: &'static str,
    /// Human-readable name used on badges (e.g., "Base").
    pub display_name: &'static str,
    /// CAIP-2 chain identifier.
    pub chain_id: &'static str,
    /// File name of the network icon within the static assets directory.
    pub icon: &'static str,
    pub explorer: Explorer,
}

static BASE: NetworkInfo = NetworkInfo {
    network: Network::Base,
    name: "base",
    display_name: "Base",
    chain_id: "eip155:8453",
    icon: "base.svg",
    explorer: Explorer {
        name: "BaseScan",
        base_url: "https://basescan.org",
    },
};

static POLYGON: NetworkInfo = NetworkInfo {
    network: Network::Polygon,
    name: "polygon",
    display_name: "Polygon",
    chain_id: "eip155:137",
    icon: "polygon.svg",
    explorer: Explorer {
        name: "PolygonScan",
        base_url: "https://polygonscan.com",
    },
};

static SOLANA: NetworkInfo = NetworkInfo {
    network: Network::Solana,
    name: "solana",
    display_name: "Solana",
    chain_id: "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp",
    icon: "solana.svg",
    explorer: Explorer {
        name: "Solana Explorer",
        base_url: "https://explorer.solana.com",
    },
};

/// All known networks, in declaration order of [`Network`].
pub static KNOWN_NETWORKS: [&NetworkInfo; 3] = [&BASE, &POLYGON, &SOLANA];

impl Network {
    /// Return all known [`Network`] variants.
    pub fn variants() -> &'static [Network] {
        &[Network::Base, Network::Polygon, Network::Solana]
    }

    pub fn info(&self) -> &'static NetworkInfo {
        match self {
            Network::Base => &BASE,
            Network::Polygon => &POLYGON,
            Network::Solana => &SOLANA,
        }
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn display_name(&self) -> &'static str {
        self.info().display_name
    }

    pub fn chain_id(&self) -> &'static str {
        self.info().chain_id
    }

    pub fn icon(&self) -> &'static str {
        self.info().icon
    }

    pub fn explorer(&self) -> Explorer {
        self.info().explorer
    }

    pub fn explorer_name(&self) -> &'static str {
        self.info().explorer.name
    }

    /// Explorer page for `address` on this network.
    pub fn explorer_url(&self, address: &str) -> String {
        self.info().explorer.address_url(address)
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a network name is not in [`KNOWN_NETWORKS`].
#[derive(Debug, thiserror::Error)]
#[error("Unknown network {0}")]
pub struct UnknownNetworkError(String);

impl FromStr for Network {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        network_by_name(s).ok_or_else(|| UnknownNetworkError(s.into()))
    }
}

/// Retrieves a network by its wire name.
pub fn network_by_name(name: &str) -> Option<Network> {
    KNOWN_NETWORKS
        .iter()
        .find(|info| info.name == name)
        .map(|info| info.network)
}

/// Retrieves a network by its CAIP-2 chain identifier.
pub fn network_by_chain_id(chain_id: &str) -> Option<Network> {
    KNOWN_NETWORKS
        .iter()
        .find(|info| info.chain_id == chain_id)
        .map(|info| info.network)
}
