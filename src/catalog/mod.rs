//! The facilitator catalog and its aggregate statistics.
//!
//! A [`Catalog`] is the read-only list of [`Facilitator`] records a build renders. It
//! computes the page-level [`CatalogStats`], the display order of the cards, and checks
//! the structural invariants of the records before anything is rendered.

pub mod known;

use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashSet;
use url::Url;

use crate::facilitator::Facilitator;
use crate::networks::Network;

/// Page-level statistics of a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Number of facilitators.
    pub total_facilitators: usize,
    /// Number of distinct networks used by any facilitator.
    pub total_networks: usize,
    /// Number of addresses across all facilitators and networks.
    pub total_addresses: usize,
}

/// Number of addresses a facilitator lists, across all networks.
///
/// Cards are ordered by this value.
pub fn address_count_of(facilitator: &Facilitator) -> usize {
    facilitator.address_count()
}

/// Catalog error types.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Facilitator at position {0} has an empty id")]
    EmptyId(usize),
    #[error("Duplicate facilitator id: {0}")]
    DuplicateId(String),
    #[error("Facilitator {0} has an empty name")]
    EmptyName(String),
    #[error("Facilitator {id} has fee {fee}% outside of 0..=100")]
    FeeOutOfRange { id: String, fee: Decimal },
    #[error("Facilitator {id} lists network {network} more than once")]
    DuplicateNetwork { id: String, network: Network },
    #[error("Facilitator {id} lists no addresses for network {network}")]
    EmptyNetwork { id: String, network: Network },
    #[error("Facilitator {id} has invalid {field} URL {value:?}: {source}")]
    InvalidUrl {
        id: String,
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Read-only, ordered list of facilitators.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    facilitators: Vec<Facilitator>,
}

impl Catalog {
    pub fn new(facilitators: Vec<Facilitator>) -> Self {
        Self { facilitators }
    }

    /// The catalog compiled into this binary.
    pub fn known() -> Self {
        Self::new(known::KNOWN_FACILITATORS.clone())
    }

    /// Facilitators in catalog order.
    pub fn facilitators(&self) -> &[Facilitator] {
        &self.facilitators
    }

    pub fn len(&self) -> usize {
        self.facilitators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilitators.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let networks: HashSet<Network> = self
            .facilitators
            .iter()
            .flat_map(|f| f.addresses.networks())
            .collect();
        CatalogStats {
            total_facilitators: self.facilitators.len(),
            total_networks: networks.len(),
            total_addresses: self.facilitators.iter().map(address_count_of).sum(),
        }
    }

    /// Facilitators ordered by address count, most addresses first.
    ///
    /// The sort is stable: facilitators with equal counts keep their catalog order.
    pub fn sorted(&self) -> Vec<&Facilitator> {
        let mut sorted: Vec<&Facilitator> = self.facilitators.iter().collect();
        sorted.sort_by_key(|f| Reverse(address_count_of(f)));
        sorted
    }

    /// Checks the structural invariants of every record, returning the first violation.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::with_capacity(self.facilitators.len());
        for (position, facilitator) in self.facilitators.iter().enumerate() {
            let id = facilitator.id.as_str();
            if id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !ids.insert(id) {
                return Err(CatalogError::DuplicateId(id.into()));
            }
            if facilitator.metadata.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(id.into()));
            }
            if facilitator.fee < Decimal::ZERO || facilitator.fee > Decimal::ONE_HUNDRED {
                return Err(CatalogError::FeeOutOfRange {
                    id: id.into(),
                    fee: facilitator.fee,
                });
            }
            validate_url(id, "image", &facilitator.metadata.image)?;
            validate_url(id, "docs", &facilitator.metadata.docs_url)?;

            let mut networks = HashSet::new();
            for (network, addresses) in facilitator.addresses.iter() {
                if !networks.insert(*network) {
                    return Err(CatalogError::DuplicateNetwork {
                        id: id.into(),
                        network: *network,
                    });
                }
                if addresses.is_empty() {
                    return Err(CatalogError::EmptyNetwork {
                        id: id.into(),
                        network: *network,
                    });
                }
            }
        }
        Ok(())
    }
}

impl From<Vec<Facilitator>> for Catalog {
    fn from(facilitators: Vec<Facilitator>) -> Self {
        Self::new(facilitators)
    }
}

fn validate_url(id: &str, field: &'static str, value: &str) -> Result<(), CatalogError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| CatalogError::InvalidUrl {
            id: id.into(),
            field,
            value: value.into(),
            source,
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::facilitator::{AccessType, Address, FacilitatorMetadata, NetworkAddresses};

    pub(crate) fn facilitator(id: &str, addresses: NetworkAddresses) -> Facilitator {
        Facilitator {
            id: id.into(),
            metadata: FacilitatorMetadata {
                name: format!("Facilitator {id}"),
                image: format!("https://{id}.example/logo.png"),
                docs_url: format!("https://{id}.example/docs"),
                color: "#336699".into(),
            },
            facilitator_url: format!("https://{id}.example/facilitator"),
            fee: Decimal::ZERO,
            access_type: AccessType::Open,
            addresses,
        }
    }

    pub(crate) fn addresses(spec: &[(Network, usize)]) -> NetworkAddresses {
        spec.iter()
            .map(|(network, count)| {
                let list = (0..*count)
                    .map(|i| Address::new(format!("{network}-addr-{i}")))
                    .collect();
                (*network, list)
            })
            .collect()
    }

    #[test]
    fn test_stats_counts_distinct_networks_and_all_addresses() {
        let catalog = Catalog::new(vec![
            facilitator("a", addresses(&[(Network::Base, 2), (Network::Solana, 1)])),
            facilitator("b", addresses(&[(Network::Base, 1)])),
            facilitator("c", addresses(&[(Network::Base, 3), (Network::Solana, 2)])),
        ]);
        let stats = catalog.stats();
        assert_eq!(stats.total_facilitators, 3);
        assert_eq!(stats.total_networks, 2);
        assert_eq!(stats.total_addresses, 9);
    }

    #[test]
    fn test_stats_of_empty_catalog() {
        assert_eq!(Catalog::default().stats(), CatalogStats::default());
    }

    #[test]
    fn test_address_count_of() {
        let f = facilitator(
            "a",
            addresses(&[(Network::Base, 2), (Network::Polygon, 4)]),
        );
        assert_eq!(address_count_of(&f), 6);
        assert_eq!(address_count_of(&facilitator("b", NetworkAddresses::new())), 0);
    }

    #[test]
    fn test_sorted_by_address_count_descending() {
        let catalog = Catalog::new(vec![
            facilitator("small", addresses(&[(Network::Base, 1)])),
            facilitator("large", addresses(&[(Network::Base, 2), (Network::Solana, 2)])),
            facilitator("medium", addresses(&[(Network::Polygon, 2)])),
        ]);
        let ids: Vec<&str> = catalog.sorted().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["large", "medium", "small"]);
    }

    #[test]
    fn test_sorted_is_stable_for_ties() {
        let catalog = Catalog::new(vec![
            facilitator("first", addresses(&[(Network::Base, 2)])),
            facilitator("bigger", addresses(&[(Network::Base, 5)])),
            facilitator("second", addresses(&[(Network::Solana, 1), (Network::Base, 1)])),
            facilitator("third", addresses(&[(Network::Polygon, 2)])),
        ]);
        let ids: Vec<&str> = catalog.sorted().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["bigger", "first", "second", "third"]);
        // Same input, same order.
        let again: Vec<&str> = catalog.sorted().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_validate_accepts_well_formed_catalog() {
        let catalog = Catalog::new(vec![
            facilitator("a", addresses(&[(Network::Base, 1)])),
            facilitator("b", addresses(&[(Network::Solana, 1)])),
        ]);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        let catalog = Catalog::new(vec![
            facilitator("a", addresses(&[(Network::Base, 1)])),
            facilitator("a", addresses(&[(Network::Solana, 1)])),
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_network() {
        let catalog = Catalog::new(vec![facilitator(
            "a",
            addresses(&[(Network::Base, 1), (Network::Polygon, 0)]),
        )]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptyNetwork { network: Network::Polygon, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_repeated_network() {
        let catalog = Catalog::new(vec![facilitator(
            "a",
            addresses(&[(Network::Base, 1), (Network::Base, 1)]),
        )]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateNetwork { network: Network::Base, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_fee_out_of_range() {
        let mut over = facilitator("over", addresses(&[(Network::Base, 1)]));
        over.fee = Decimal::new(1001, 1);
        assert!(matches!(
            Catalog::new(vec![over]).validate(),
            Err(CatalogError::FeeOutOfRange { .. })
        ));

        let mut negative = facilitator("negative", addresses(&[(Network::Base, 1)]));
        negative.fee = Decimal::new(-5, 1);
        assert!(matches!(
            Catalog::new(vec![negative]).validate(),
            Err(CatalogError::FeeOutOfRange { .. })
        ));

        let mut full = facilitator("full", addresses(&[(Network::Base, 1)]));
        full.fee = Decimal::ONE_HUNDRED;
        assert!(Catalog::new(vec![full]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_docs_url() {
        let mut f = facilitator("a", addresses(&[(Network::Base, 1)]));
        f.metadata.docs_url = "/docs".into();
        assert!(matches!(
            Catalog::new(vec![f]).validate(),
            Err(CatalogError::InvalidUrl { field: "docs", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let f = facilitator("", addresses(&[(Network::Base, 1)]));
        assert!(matches!(
            Catalog::new(vec![f]).validate(),
            Err(CatalogError::EmptyId(0))
        ));
    }
}
