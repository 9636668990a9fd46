//! Writing the generated site to disk.
//!
//! A build reads the page template, renders the catalog into `index.html` in the output
//! directory, copies the required icon assets next to it, and passes the domain mapping
//! (`CNAME`) file through when one exists. Steps run one after the other; the first
//! failure aborts the build, except for the optional `CNAME` which is skipped.

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::networks::Network;
use crate::render::card::{LOCK_ICON, MONEY_ICON};
use crate::render::{Template, render_page};

/// Name of the rendered page within the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Name of the domain mapping file within the output directory.
pub const CNAME_FILE: &str = "CNAME";

/// Site error types.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read template at {0}: {1}")]
    TemplateRead(PathBuf, io::Error),
    #[error("Failed to create output directory {0}: {1}")]
    OutputDir(PathBuf, io::Error),
    #[error("Failed to write {0}: {1}")]
    Write(PathBuf, io::Error),
    #[error("Failed to copy required asset {0}: {1}")]
    AssetCopy(PathBuf, io::Error),
}

/// What a build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Path of the rendered page.
    pub index: PathBuf,
    /// Copied asset paths, in [`required_assets`] order.
    pub assets: Vec<PathBuf>,
    /// Whether the `CNAME` file was passed through.
    pub cname: bool,
}

/// File names of the static assets a rendered page refers to.
///
/// Network icons first, in [`Network::variants`] order, then the access icons.
pub fn required_assets() -> Vec<&'static str> {
    Network::variants()
        .iter()
        .map(|network| network.icon())
        .chain([LOCK_ICON, MONEY_ICON])
        .collect()
}

pub async fn read_template(path: &Path) -> Result<Template, SiteError> {
    let text = fs::read_to_string(path)
        .await
        .map_err(|e| SiteError::TemplateRead(path.into(), e))?;
    Ok(Template::new(text))
}

/// Writes `page` as [`INDEX_FILE`] into `out_dir`, creating the directory if needed.
pub async fn write_page(out_dir: &Path, page: &str) -> Result<PathBuf, SiteError> {
    fs::create_dir_all(out_dir)
        .await
        .map_err(|e| SiteError::OutputDir(out_dir.into(), e))?;
    let index = out_dir.join(INDEX_FILE);
    fs::write(&index, page)
        .await
        .map_err(|e| SiteError::Write(index.clone(), e))?;
    Ok(index)
}

/// Copies every [`required_assets`] file from `static_dir` into `out_dir`, byte for byte.
pub async fn copy_assets(static_dir: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut copied = Vec::new();
    for asset in required_assets() {
        let source = static_dir.join(asset);
        let target = out_dir.join(asset);
        fs::copy(&source, &target)
            .await
            .map_err(|e| SiteError::AssetCopy(source.clone(), e))?;
        tracing::debug!(asset, "Copied {}", target.display());
        copied.push(target);
    }
    Ok(copied)
}

/// Copies the `cname` file into `out_dir` as [`CNAME_FILE`].
///
/// Returns `false` when the file could not be copied; the build goes on without it.
pub async fn copy_cname(cname: &Path, out_dir: &Path) -> bool {
    let target = out_dir.join(CNAME_FILE);
    match fs::copy(cname, &target).await {
        Ok(_) => {
            tracing::info!("Copied {} to {}", cname.display(), target.display());
            true
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!("No {} file found, skipping", cname.display());
            false
        }
        Err(e) => {
            tracing::warn!("Failed to copy {}, skipping: {}", cname.display(), e);
            false
        }
    }
}

/// Renders `catalog` with the configured template and writes the site.
pub async fn build(config: &Config, catalog: &Catalog) -> Result<BuildReport, SiteError> {
    let template = read_template(config.template()).await?;
    for placeholder in template.missing_placeholders() {
        tracing::warn!(
            placeholder,
            "Template {} has no placeholder, it will stay unfilled",
            config.template().display()
        );
    }

    let page = render_page(catalog, &template);
    let index = write_page(config.out_dir(), &page).await?;
    let assets = copy_assets(config.static_dir(), config.out_dir()).await?;
    let cname = copy_cname(config.cname(), config.out_dir()).await;

    Ok(BuildReport {
        index,
        assets,
        cname,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{addresses, facilitator};

    const TEMPLATE: &str =
        "{{TOTAL_FACILITATORS}}|{{TOTAL_NETWORKS}}|{{TOTAL_ADDRESSES}}\n{{FACILITATOR_CARDS}}";

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "x402-directory-site-{}-{}",
            std::process::id(),
            name
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("static")).unwrap();
        std::fs::write(dir.join("template.html"), TEMPLATE).unwrap();
        for asset in required_assets() {
            std::fs::write(dir.join("static").join(asset), format!("<svg>{asset}</svg>")).unwrap();
        }
        dir
    }

    fn config_for(dir: &Path) -> Config {
        Config::default()
            .with_template(dir.join("template.html"))
            .with_static_dir(dir.join("static"))
            .with_out_dir(dir.join("out"))
            .with_cname(dir.join("CNAME"))
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            facilitator("one", addresses(&[(Network::Base, 1)])),
            facilitator("two", addresses(&[(Network::Base, 2), (Network::Solana, 1)])),
        ])
    }

    #[test]
    fn test_required_assets() {
        assert_eq!(
            required_assets(),
            vec!["base.svg", "polygon.svg", "solana.svg", "lock.svg", "money.svg"]
        );
    }

    #[tokio::test]
    async fn test_build_writes_page_and_assets() {
        let dir = scratch_dir("build");
        let report = build(&config_for(&dir), &catalog()).await.unwrap();

        let page = std::fs::read_to_string(&report.index).unwrap();
        assert!(page.starts_with("2|2|4\n"));
        assert!(page.find(r#"data-id="two""#).unwrap() < page.find(r#"data-id="one""#).unwrap());

        assert_eq!(report.assets.len(), required_assets().len());
        let lock = std::fs::read_to_string(dir.join("out").join("lock.svg")).unwrap();
        assert_eq!(lock, "<svg>lock.svg</svg>");
        assert!(!report.cname);
        assert!(!dir.join("out").join(CNAME_FILE).exists());
    }

    #[tokio::test]
    async fn test_build_passes_cname_through() {
        let dir = scratch_dir("cname");
        std::fs::write(dir.join("CNAME"), "directory.x402.rs\n").unwrap();
        let report = build(&config_for(&dir), &catalog()).await.unwrap();
        assert!(report.cname);
        let cname = std::fs::read_to_string(dir.join("out").join(CNAME_FILE)).unwrap();
        assert_eq!(cname, "directory.x402.rs\n");
    }

    #[tokio::test]
    async fn test_build_is_idempotent() {
        let dir = scratch_dir("idempotent");
        let config = config_for(&dir);
        let first = build(&config, &catalog()).await.unwrap();
        let first_page = std::fs::read(&first.index).unwrap();
        let second = build(&config, &catalog()).await.unwrap();
        let second_page = std::fs::read(&second.index).unwrap();
        assert_eq!(first_page, second_page);
    }

    #[tokio::test]
    async fn test_build_fails_on_missing_asset() {
        let dir = scratch_dir("missing-asset");
        std::fs::remove_file(dir.join("static").join("money.svg")).unwrap();
        let result = build(&config_for(&dir), &catalog()).await;
        assert!(matches!(result, Err(SiteError::AssetCopy(path, _)) if path.ends_with("money.svg")));
    }

    #[tokio::test]
    async fn test_build_fails_on_missing_template() {
        let dir = scratch_dir("missing-template");
        std::fs::remove_file(dir.join("template.html")).unwrap();
        let result = build(&config_for(&dir), &catalog()).await;
        assert!(matches!(result, Err(SiteError::TemplateRead(..))));
        assert!(!dir.join("out").exists());
    }
}
