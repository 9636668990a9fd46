//! Page template with placeholder substitution.

use crate::catalog::CatalogStats;

pub const TOTAL_FACILITATORS: &str = "{{TOTAL_FACILITATORS}}";
pub const TOTAL_NETWORKS: &str = "{{TOTAL_NETWORKS}}";
pub const TOTAL_ADDRESSES: &str = "{{TOTAL_ADDRESSES}}";
pub const FACILITATOR_CARDS: &str = "{{FACILITATOR_CARDS}}";

/// Every placeholder a page template is expected to contain.
pub const PLACEHOLDERS: [&str; 4] = [
    TOTAL_FACILITATORS,
    TOTAL_NETWORKS,
    TOTAL_ADDRESSES,
    FACILITATOR_CARDS,
];

/// Page-level template text.
///
/// The generator owns nothing of the page but the four placeholders; everything else,
/// styles and client-side scripts included, comes from the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Placeholders absent from the template text.
    ///
    /// [`Template::compose`] leaves the page as is where a placeholder is missing;
    /// callers use this to report it.
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDERS
            .iter()
            .copied()
            .filter(|placeholder| !self.text.contains(placeholder))
            .collect()
    }

    /// Substitutes the first occurrence of each placeholder.
    ///
    /// Statistics are substituted before the cards, so text inside `cards` is never
    /// treated as a placeholder.
    pub fn compose(&self, stats: &CatalogStats, cards: &str) -> String {
        self.text
            .replacen(
                TOTAL_FACILITATORS,
                &stats.total_facilitators.to_string(),
                1,
            )
            .replacen(TOTAL_NETWORKS, &stats.total_networks.to_string(), 1)
            .replacen(TOTAL_ADDRESSES, &stats.total_addresses.to_string(), 1)
            .replacen(FACILITATOR_CARDS, cards, 1)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
