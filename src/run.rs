//! Directory build entrypoint.

use dotenvy::dotenv;

use crate::config::Config;
use crate::site;
use crate::util::Telemetry;

/// Builds the facilitator directory.
///
/// - Loads `.env` variables.
/// - Initializes logging.
/// - Loads and validates the catalog.
/// - Renders the page and writes the site into the output directory.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env variables
    dotenv().ok();

    let telemetry = Telemetry::new()
        .with_name(env!("CARGO_PKG_NAME"))
        .with_version(env!("CARGO_PKG_VERSION"))
        .register();

    let config = Config::load();
    tracing::info!(
        template = %config.template().display(),
        static_dir = %config.static_dir().display(),
        out_dir = %config.out_dir().display(),
        "Building {} {}",
        telemetry.name(),
        telemetry.version()
    );

    let catalog = config.catalog()?;
    catalog.validate()?;
    let stats = catalog.stats();
    tracing::info!(
        facilitators = stats.total_facilitators,
        networks = stats.total_networks,
        addresses = stats.total_addresses,
        "Catalog loaded from {}",
        config
            .catalog_path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in catalog".to_string())
    );

    let report = site::build(&config, &catalog).await?;
    tracing::info!(
        assets = report.assets.len(),
        cname = report.cname,
        "Wrote {}",
        report.index.display()
    );

    Ok(())
}
