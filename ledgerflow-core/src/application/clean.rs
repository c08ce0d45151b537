// ledgerflow-core/src/application/clean.rs

use crate::error::PipelineError;
use crate::infrastructure::config::pipeline::load_pipeline_config;
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::path::{Component, Path};

/// Remove the run artifacts (CSV, database, run summary) by deleting
/// the configured output directory.
pub fn clean_artifacts(project_dir: &Path) -> Result<(), PipelineError> {
    tracing::info!("🧹 Initializing cleanup sequence...");

    let config = load_pipeline_config(project_dir).map_err(PipelineError::Infrastructure)?;

    // Zero-Trust Path Traversal Guard. starts_with alone is lexical and
    // would accept "../x", so ".." components are rejected outright.
    let rel = Path::new(&config.out_dir);
    if rel.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(PipelineError::UnsafePath(config.out_dir));
    }
    let full_path = project_dir.join(rel);
    if !full_path.starts_with(project_dir) {
        return Err(PipelineError::UnsafePath(config.out_dir));
    }

    if full_path.exists() {
        fs::remove_dir_all(&full_path)
            .map_err(|e| PipelineError::Infrastructure(InfrastructureError::Io(e)))?;
        println!("   🗑️  Artifacts removed: {}", config.out_dir);
    }

    Ok(())
}
