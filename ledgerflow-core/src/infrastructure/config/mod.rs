// ledgerflow-core/src/infrastructure/config/mod.rs

pub mod pipeline;

pub use crate::domain::configuration::{CategoryThresholds, PipelineConfig};
pub use pipeline::load_pipeline_config;
