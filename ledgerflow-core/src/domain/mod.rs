// ledgerflow-core/src/domain/mod.rs

pub mod configuration;
pub mod error;
pub mod record;
pub mod transform;

pub use configuration::{CategoryThresholds, PipelineConfig};
pub use error::DomainError;
pub use record::{Category, EnrichedRecord, RawRecord};
