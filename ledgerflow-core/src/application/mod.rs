// ledgerflow-core/src/application/mod.rs

pub mod clean;
pub mod pipeline;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use ledgerflow_core::application::{run_pipeline, clean_artifacts};`
// without knowing the internal file structure.

pub use clean::clean_artifacts;
pub use pipeline::{RunResult, run_pipeline};
