//! Configuration of a directory build.
//!
//! Every setting is a path and can be given as a CLI flag, as an environment variable
//! (also read from `.env`), or left to its default. Running the binary without flags
//! builds the compiled-in catalog from the default site layout.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::facilitator::Facilitator;

/// CLI arguments for the directory generator.
#[derive(Parser, Debug)]
#[command(name = "x402-directory")]
#[command(about = "Generate the static x402 facilitator directory")]
struct CliArgs {
    /// Page template containing the directory placeholders
    #[arg(long, env = "DIRECTORY_TEMPLATE", default_value = config_defaults::DEFAULT_TEMPLATE)]
    template: PathBuf,
    /// Directory holding the required icon assets
    #[arg(long, env = "DIRECTORY_STATIC_DIR", default_value = config_defaults::DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,
    /// Directory the site is written to
    #[arg(long, env = "DIRECTORY_OUT_DIR", default_value = config_defaults::DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
    /// Domain mapping file copied into the site when present
    #[arg(long, env = "DIRECTORY_CNAME", default_value = config_defaults::DEFAULT_CNAME)]
    cname: PathBuf,
    /// JSON catalog to render instead of the compiled-in one
    #[arg(long, env = "DIRECTORY_CATALOG")]
    catalog: Option<PathBuf>,
}

/// Build configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    template: PathBuf,
    static_dir: PathBuf,
    out_dir: PathBuf,
    cname: PathBuf,
    catalog: Option<PathBuf>,
}

pub mod config_defaults {
    pub const DEFAULT_TEMPLATE: &str = "site/template.html";
    pub const DEFAULT_STATIC_DIR: &str = "site/static";
    pub const DEFAULT_OUT_DIR: &str = "dist";
    pub const DEFAULT_CNAME: &str = "CNAME";
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read catalog file at {0}: {1}")]
    CatalogRead(PathBuf, std::io::Error),
    #[error("Failed to parse catalog file at {0}: {1}")]
    CatalogParse(PathBuf, serde_json::Error),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            template: config_defaults::DEFAULT_TEMPLATE.into(),
            static_dir: config_defaults::DEFAULT_STATIC_DIR.into(),
            out_dir: config_defaults::DEFAULT_OUT_DIR.into(),
            cname: config_defaults::DEFAULT_CNAME.into(),
            catalog: None,
        }
    }
}

impl From<CliArgs> for Config {
    fn from(args: CliArgs) -> Self {
        Config {
            template: args.template,
            static_dir: args.static_dir,
            out_dir: args.out_dir,
            cname: args.cname,
            catalog: args.catalog,
        }
    }
}

impl Config {
    /// Load configuration from CLI arguments and environment variables.
    pub fn load() -> Self {
        CliArgs::parse().into()
    }

    pub fn with_template<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.template = path.into();
        self
    }

    pub fn with_static_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.static_dir = path.into();
        self
    }

    pub fn with_out_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.out_dir = path.into();
        self
    }

    pub fn with_cname<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.cname = path.into();
        self
    }

    pub fn with_catalog<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.catalog = Some(path.into());
        self
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn cname(&self) -> &Path {
        &self.cname
    }

    /// Path of the JSON catalog, if one overrides the compiled-in catalog.
    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog.as_deref()
    }

    /// The catalog to render: the JSON file when configured, the compiled-in one otherwise.
    ///
    /// The file holds an array of facilitators.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog {
            Some(path) => load_catalog_from_path(path),
            None => Ok(Catalog::known()),
        }
    }
}

fn load_catalog_from_path(path: &Path) -> Result<Catalog, ConfigError> {
    let content =
        fs::read_to_string(path).map_err(|e| ConfigError::CatalogRead(path.into(), e))?;
    let facilitators: Vec<Facilitator> =
        serde_json::from_str(&content).map_err(|e| ConfigError::CatalogParse(path.into(), e))?;
    Ok(Catalog::new(facilitators))
}
