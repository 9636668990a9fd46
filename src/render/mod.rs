//! Directory page rendering.
//!
//! - [`card`] — one HTML fragment per facilitator.
//! - [`template`] — placeholder substitution into the page template.
//!
//! [`render_page`] ties both to a [`Catalog`]: cards in [`Catalog::sorted`] order,
//! statistics from [`Catalog::stats`]. Rendering is a pure function of the catalog and
//! the template text.

pub mod card;
pub mod template;

pub use card::render_card;
pub use template::Template;

use crate::catalog::Catalog;

/// Renders the full directory page.
pub fn render_page(catalog: &Catalog, template: &Template) -> String {
    let cards: Vec<String> = catalog.sorted().into_iter().map(render_card).collect();
    template.compose(&catalog.stats(), &cards.join("\n"))
}
