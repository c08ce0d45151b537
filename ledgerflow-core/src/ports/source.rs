// ledgerflow-core/src/ports/source.rs

use crate::domain::record::RawRecord;
use crate::error::PipelineError;

/// Contract for record extraction: a finite, ordered, deterministic
/// batch of raw records. Synchronous because extraction never suspends
/// in this pipeline (the production source is embedded in the binary).
pub trait Source: Send + Sync {
    fn extract(&self) -> Result<Vec<RawRecord>, PipelineError>;

    fn name(&self) -> &str;
}
