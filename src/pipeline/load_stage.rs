//! Input loading stage.

use crate::catalog::{Questionnaire, ThreatCatalog};
use crate::config::CatalogConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the catalog path: explicit flag first, then configuration.
pub fn resolve_catalog_path(explicit: Option<&Path>, config: &CatalogConfig) -> Result<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.path.clone())
        .context("No threat catalog configured: pass --catalog or set catalog.path")
}

/// Load the threat catalog with context for error messages
pub fn load_catalog(path: &Path, quiet: bool) -> Result<ThreatCatalog> {
    if !quiet {
        tracing::info!("Loading threat catalog: {}", path.display());
    }
    let catalog = ThreatCatalog::load(path)
        .with_context(|| format!("Failed to load threat catalog: {}", path.display()))?;
    if catalog.is_empty() {
        tracing::warn!("Threat catalog {} contains no threats", path.display());
    }
    Ok(catalog)
}

/// Load a questionnaire with context for error messages
pub fn load_questionnaire(path: &Path, quiet: bool) -> Result<Questionnaire> {
    if !quiet {
        tracing::info!("Loading questionnaire: {}", path.display());
    }
    Questionnaire::load(path)
        .with_context(|| format!("Failed to load questionnaire: {}", path.display()))
}
