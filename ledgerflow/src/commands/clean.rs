// ledgerflow/src/commands/clean.rs
//
// USE CASE: Clean run artifacts.

use std::path::PathBuf;

use ledgerflow_core::application::clean_artifacts;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    if let Err(e) = clean_artifacts(&project_dir) {
        eprintln!("❌ Clean failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
