//! Facilitator card markup.
//!
//! A card is a self-contained HTML fragment describing one facilitator: logo and name,
//! endpoint and terms, the networks it runs on, every address with an explorer link,
//! the date of its first on-chain transaction, and a link to its documentation.
//!
//! Toggling the address list and copying an address are handled client side by the
//! page template (`toggleAddresses`, `copyAddress`); cards only carry the hooks.

use chrono::NaiveDate;
use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::facilitator::{AccessType, Address, Facilitator};
use crate::networks::Network;

/// Icon shown for facilitators with restricted access.
pub const LOCK_ICON: &str = "lock.svg";
/// Icon shown, after the lock, for facilitators requiring a paid plan.
pub const MONEY_ICON: &str = "money.svg";

/// Renders the card of `facilitator` to HTML text.
pub fn render_card(facilitator: &Facilitator) -> String {
    card(facilitator).into_string()
}

pub fn card(facilitator: &Facilitator) -> Markup {
    let metadata = &facilitator.metadata;
    html! {
        div class="facilitator-card" data-id=(facilitator.id) style=(format!("--accent-color: {}", metadata.color)) {
            div class="card-header" {
                img class="facilitator-logo" src=(metadata.image) alt=(format!("{} logo", metadata.name)) onerror="this.style.display='none'";
                div class="facilitator-title" {
                    h3 class="facilitator-name" { (metadata.name) }
                    span class="facilitator-id" { (facilitator.id) }
                }
            }
            div class="primary-address" {
                code class="facilitator-url" { (facilitator.facilitator_url) }
                div class="facilitator-terms" {
                    span class="fee" { (fee_label(facilitator.fee)) }
                    (access_icons(facilitator.access_type))
                }
            }
            div class="network-badges" {
                @for network in facilitator.addresses.networks() {
                    (network_badge(network))
                }
            }
            div class="address-list" {
                button class="address-toggle" type="button" aria-expanded="false" onclick="toggleAddresses(this)" {
                    (address_count_label(facilitator.address_count()))
                }
                div class="address-rows" hidden {
                    @for (network, address) in facilitator.addresses.iter_addresses() {
                        (address_row(network, address))
                    }
                }
            }
            @if let Some(date) = facilitator.first_transaction() {
                div class="first-transaction" {
                    span class="first-transaction-label" { "First transaction: " }
                    time datetime=(date.format("%Y-%m-%d").to_string()) { (format_date(date)) }
                }
            }
            a class="docs-link" href=(metadata.docs_url) target="_blank" rel="noopener noreferrer" { "Documentation" }
        }
    }
}

/// `0% Fee` for free facilitators, otherwise the fee in its shortest decimal form.
pub fn fee_label(fee: Decimal) -> String {
    if fee.is_zero() {
        "0% Fee".to_string()
    } else {
        format!("{}% Fee", fee.normalize())
    }
}

/// Calendar date as `MMM D, YYYY`, e.g. `Mar 1, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn address_count_label(count: usize) -> String {
    match count {
        1 => "1 address".to_string(),
        n => format!("{n} addresses"),
    }
}

fn access_icons(access_type: AccessType) -> Markup {
    html! {
        @if access_type.is_gated() {
            img class="access-icon" src=(LOCK_ICON) alt="Gated access" title="Gated access";
        }
        @if access_type.is_paid() {
            img class="access-icon" src=(MONEY_ICON) alt="Paid access" title="Requires a paid plan";
        }
    }
}

fn network_badge(network: Network) -> Markup {
    html! {
        span class="network-badge" data-network=(network.name()) title=(network.chain_id()) {
            img class="network-icon" src=(network.icon()) alt="";
            (network.display_name())
        }
    }
}

fn address_row(network: Network, address: &Address) -> Markup {
    html! {
        div class="address-row" data-network=(network.name()) {
            img class="network-icon" src=(network.icon()) alt=(network.display_name());
            code class="address" { (address.address) }
            button class="copy-button" type="button" data-address=(address.address) onclick="copyAddress(this)" { "Copy" }
            a class="explorer-link" href=(network.explorer_url(&address.address)) target="_blank" rel="noopener noreferrer" {
                "View on " (network.explorer_name())
            }
        }
    }
}
