use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::product::Product;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("could not read catalog fixture `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog fixture `{label}`: {source}")]
    Parse { label: String, source: serde_json::Error },
}

/// Deterministic demo catalog: the six sample products the product team
/// uses for walkthroughs. This is the default data source when no
/// `catalog.fixture_path` is configured, and the dataset every scenario
/// test runs against.
pub struct SeedCatalog;

impl SeedCatalog {
    /// JSON fixture content, embedded so the binary needs no working
    /// directory to demo from.
    pub const JSON: &str = include_str!("../../../config/fixtures/catalog_seed.json");

    pub fn products() -> Result<Vec<Product>, FixtureError> {
        parse(Self::JSON, "<embedded seed>")
    }

    /// Read an operator-supplied fixture file in the same JSON shape.
    pub fn load_file(path: &Path) -> Result<Vec<Product>, FixtureError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| FixtureError::ReadFile { path: path.to_path_buf(), source })?;
        parse(&raw, &path.display().to_string())
    }
}

fn parse(raw: &str, label: &str) -> Result<Vec<Product>, FixtureError> {
    serde_json::from_str(raw)
        .map_err(|source| FixtureError::Parse { label: label.to_string(), source })
}
