//! Facilitator records listed in the directory.
//!
//! A [`Facilitator`] is a third-party service that verifies and settles x402 payments.
//! Each record carries presentation metadata, its public endpoint, fee terms, access
//! restrictions, and the on-chain addresses it settles from, grouped per [`Network`].
//!
//! All types serialize with camelCase field names, so a catalog can be written as JSON:
//!
//! ```json
//! {
//!   "id": "x402rs",
//!   "metadata": {
//!     "name": "x402.rs",
//!     "image": "https://x402.rs/logo.png",
//!     "docsUrl": "https://x402.rs",
//!     "color": "#6B4EFF"
//!   },
//!   "facilitatorUrl": "https://facilitator.x402.rs",
//!   "fee": 0,
//!   "accessType": "open",
//!   "addresses": {
//!     "base": [{ "address": "0x...", "dateOfFirstTransaction": "2025-05-12" }]
//!   }
//! }
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::networks::Network;

/// A fungible token a facilitator accepts on the network its address sits on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRef {
    /// Ticker symbol (e.g., "USDC").
    pub symbol: String,
    /// Token contract or mint address.
    pub address: String,
}

impl TokenRef {
    pub fn new<S: Into<String>, A: Into<String>>(symbol: S, address: A) -> Self {
        Self {
            symbol: symbol.into(),
            address: address.into(),
        }
    }

    /// USDC deployment on the given network.
    pub fn usdc(network: Network) -> Self {
        let address = match network {
            Network::Base => "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
            Network::Polygon => "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359",
            Network::Solana => "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
        };
        Self::new("USDC", address)
    }
}

/// An on-chain address operated by a facilitator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Network-specific address string. Not validated.
    pub address: String,
    #[serde(default)]
    pub tokens: Vec<TokenRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_first_transaction: Option<NaiveDate>,
}

impl Address {
    pub fn new<S: Into<String>>(address: S) -> Self {
        Self {
            address: address.into(),
            tokens: Vec::new(),
            date_of_first_transaction: None,
        }
    }

    pub fn with_token(mut self, token: TokenRef) -> Self {
        self.tokens.push(token);
        self
    }

    pub fn with_first_transaction(mut self, date: NaiveDate) -> Self {
        self.date_of_first_transaction = Some(date);
        self
    }
}

/// Presentation-only details of a facilitator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitatorMetadata {
    /// Display name.
    pub name: String,
    /// Logo URL.
    pub image: String,
    /// Documentation URL.
    pub docs_url: String,
    /// Accent colour as a CSS hex string (e.g., "#0052FF").
    pub color: String,
}

/// Who may call a facilitator's API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    /// Anyone can use the facilitator.
    #[default]
    Open,
    /// Access is restricted, e.g. behind an API key.
    Gated,
    /// Access is restricted and requires a paid plan.
    GatedPaid,
}

impl AccessType {
    pub fn is_gated(&self) -> bool {
        matches!(self, AccessType::Gated | AccessType::GatedPaid)
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, AccessType::GatedPaid)
    }
}

/// Addresses grouped per network, in insertion order.
///
/// This is a wrapper around `Vec<(Network, Vec<Address>)>` that serializes as a map
/// keyed by network name. Deserialization keeps the document order of the keys, and
/// keeps repeated keys as separate entries so catalog validation can reject them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkAddresses(pub Vec<(Network, Vec<Address>)>);

impl NetworkAddresses {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends the addresses of `network` after the networks already present.
    pub fn with(mut self, network: Network, addresses: Vec<Address>) -> Self {
        self.0.push((network, addresses));
        self
    }

    /// Network keys in insertion order.
    pub fn networks(&self) -> impl Iterator<Item = Network> + '_ {
        self.0.iter().map(|(network, _)| *network)
    }

    /// Every `(network, address)` pair, networks in insertion order, then addresses in
    /// sequence order.
    pub fn iter_addresses(&self) -> impl Iterator<Item = (Network, &Address)> + '_ {
        self.0
            .iter()
            .flat_map(|(network, addresses)| addresses.iter().map(move |a| (*network, a)))
    }

    /// Total number of addresses across all networks.
    pub fn address_count(&self) -> usize {
        self.0.iter().map(|(_, addresses)| addresses.len()).sum()
    }
}

impl Deref for NetworkAddresses {
    type Target = Vec<(Network, Vec<Address>)>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<(Network, Vec<Address>)> for NetworkAddresses {
    fn from_iter<T: IntoIterator<Item = (Network, Vec<Address>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for NetworkAddresses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (network, addresses) in &self.0 {
            map.serialize_entry(network, addresses)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NetworkAddresses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};
        use std::fmt;

        struct NetworkAddressesVisitor;

        impl<'de> Visitor<'de> for NetworkAddressesVisitor {
            type Value = NetworkAddresses;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of network names to address lists")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(network) = access.next_key::<Network>()? {
                    let addresses: Vec<Address> = access.next_value()?;
                    entries.push((network, addresses));
                }
                Ok(NetworkAddresses(entries))
            }
        }

        deserializer.deserialize_map(NetworkAddressesVisitor)
    }
}

/// A facilitator entry of the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facilitator {
    /// Identifier, unique across the catalog.
    pub id: String,
    pub metadata: FacilitatorMetadata,
    /// Public endpoint of the facilitator.
    pub facilitator_url: String,
    /// Fee as a percentage, `0..=100`.
    pub fee: Decimal,
    #[serde(default)]
    pub access_type: AccessType,
    pub addresses: NetworkAddresses,
}

impl Facilitator {
    /// Number of on-chain addresses across all networks.
    pub fn address_count(&self) -> usize {
        self.addresses.address_count()
    }

    /// Earliest first-transaction date across all addresses, ignoring undated ones.
    pub fn first_transaction(&self) -> Option<NaiveDate> {
        self.addresses
            .iter_addresses()
            .filter_map(|(_, address)| address.date_of_first_transaction)
            .min()
    }
}
