//! Static directory of [x402](https://www.x402.org) facilitators.
//!
//! This crate renders a catalog of x402 facilitators, the services that verify and
//! settle payments for HTTP 402 flows, into a single static HTML page. Each facilitator
//! is shown as a card with its endpoint, fee, access terms and the on-chain addresses
//! it operates, linked to the matching block explorer.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`facilitator`] | Facilitator records: metadata, fees, access type, addresses |
//! | [`networks`] | Known networks with their explorers and icons |
//! | [`catalog`] | The catalog, its statistics, ordering and validation |
//! | [`render`] | Card markup and page template substitution |
//! | [`site`] | Writing the page and its assets to disk |
//! | [`config`] | CLI and environment configuration |
//! | [`run`] | Build entrypoint |
//! | [`util`] | Logging setup |
//!
//! # Example
//!
//! ```
//! use x402_directory::catalog::Catalog;
//! use x402_directory::render::{Template, render_page};
//!
//! let template = Template::new("{{TOTAL_FACILITATORS}} facilitators\n{{FACILITATOR_CARDS}}");
//! let page = render_page(&Catalog::known(), &template);
//! assert!(page.starts_with("3 facilitators\n"));
//! ```

pub mod catalog;
pub mod config;
pub mod facilitator;
pub mod networks;
pub mod render;
pub mod run;
pub mod site;
pub mod util;

pub use run::run;
