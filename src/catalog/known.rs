//! Facilitators compiled into the directory.
//!
//! Each entry is authored by hand. Keep `id`s unique and list a network only when the
//! facilitator operates at least one address on it; [`Catalog::validate`] rejects
//! anything else at build time.
//!
//! [`Catalog::validate`]: super::Catalog::validate

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::LazyLock;

use crate::facilitator::{
    AccessType, Address, Facilitator, FacilitatorMetadata, NetworkAddresses, TokenRef,
};
use crate::networks::Network;

pub static KNOWN_FACILITATORS: LazyLock<Vec<Facilitator>> =
    LazyLock::new(|| vec![x402rs(), coinbase(), payai()]);

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn usdc_address(network: Network, address: &str) -> Address {
    Address::new(address).with_token(TokenRef::usdc(network))
}

fn x402rs() -> Facilitator {
    Facilitator {
        id: "x402rs".into(),
        metadata: FacilitatorMetadata {
            name: "x402.rs".into(),
            image: "https://x402.rs/logo.png".into(),
            docs_url: "https://x402.rs".into(),
            color: "#F46B2A".into(),
        },
        facilitator_url: "https://facilitator.x402.rs".into(),
        fee: Decimal::ZERO,
        access_type: AccessType::Open,
        addresses: NetworkAddresses::new()
            .with(
                Network::Base,
                vec![
                    usdc_address(Network::Base, "0x4307fa58fad5feee73a8d6b4bb9020ac654ebd6e")
                        .with_first_transaction(date(2025, 5, 12)),
                    usdc_address(Network::Base, "0x036942958ba5970e9c5eee85c16141cbd64fdacd"),
                ],
            )
            .with(
                Network::Polygon,
                vec![usdc_address(
                    Network::Polygon,
                    "0x036942958ba5970e9c5eee85c16141cbd64fdacd",
                )],
            )
            .with(
                Network::Solana,
                vec![
                    usdc_address(Network::Solana, "c2DYt2sbDRd8PjGwAx6JPWBNavqQWEVMNyiYUgsZFDVb")
                        .with_first_transaction(date(2025, 8, 21)),
                ],
            ),
    }
}

fn coinbase() -> Facilitator {
    Facilitator {
        id: "coinbase".into(),
        metadata: FacilitatorMetadata {
            name: "Coinbase Developer Platform".into(),
            image: "https://www.coinbase.com/favicon.ico".into(),
            docs_url: "https://docs.cdp.coinbase.com/x402/welcome".into(),
            color: "#0052FF".into(),
        },
        facilitator_url: "https://api.cdp.coinbase.com/platform/v2/x402".into(),
        fee: Decimal::ZERO,
        access_type: AccessType::Gated,
        addresses: NetworkAddresses::new()
            .with(
                Network::Base,
                vec![
                    usdc_address(Network::Base, "0x63b2a5b7800816234b31c01af4f03bf1ba81169a")
                        .with_first_transaction(date(2025, 5, 6)),
                ],
            )
            .with(
                Network::Solana,
                vec![usdc_address(
                    Network::Solana,
                    "rGXihXfBdt5p43D2uP4Xpdz3tbgRhBL3dWxon5SvFSXs",
                )],
            ),
    }
}

fn payai() -> Facilitator {
    Facilitator {
        id: "payai".into(),
        metadata: FacilitatorMetadata {
            name: "PayAI".into(),
            image: "https://payai.network/logo.png".into(),
            docs_url: "https://docs.payai.network".into(),
            color: "#8B5CF6".into(),
        },
        facilitator_url: "https://facilitator.payai.network".into(),
        fee: Decimal::ZERO,
        access_type: AccessType::Open,
        addresses: NetworkAddresses::new()
            .with(
                Network::Solana,
                vec![
                    usdc_address(Network::Solana, "gE6HLMeThy8GyjddDR5hqshuZt7aXMvzgkCZVc7yd47P")
                        .with_first_transaction(date(2025, 7, 2)),
                ],
            )
            .with(
                Network::Base,
                vec![usdc_address(
                    Network::Base,
                    "0xb4c54a1670ecdffc19a8966b21338dd2883d69ea",
                )],
            )
            .with(
                Network::Polygon,
                vec![usdc_address(
                    Network::Polygon,
                    "0x7ec1b2c8663c1c07a3e3eb85d94a407082954b7f",
                )],
            ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_known_catalog_is_valid() {
        Catalog::known().validate().unwrap();
    }

    #[test]
    fn test_known_catalog_covers_every_network() {
        let stats = Catalog::known().stats();
        assert_eq!(stats.total_facilitators, KNOWN_FACILITATORS.len());
        assert_eq!(stats.total_networks, Network::variants().len());
    }

    #[test]
    fn test_known_addresses_carry_usdc() {
        for facilitator in KNOWN_FACILITATORS.iter() {
            for (network, address) in facilitator.addresses.iter_addresses() {
                assert_eq!(address.tokens, vec![TokenRef::usdc(network)]);
            }
        }
    }
}
