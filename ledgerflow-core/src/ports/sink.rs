// ledgerflow-core/src/ports/sink.rs

// This file defines where the application persists records, without
// knowing how it's done. The pipeline only ever sees `write(records)`;
// whether that lands in a CSV file, a DuckDB table, or an in-memory
// test buffer is the adapter's business.

use crate::domain::record::EnrichedRecord;
use crate::error::PipelineError;
use async_trait::async_trait;

#[async_trait]
pub trait Sink: Send + Sync {
    /// Persist the full enriched batch, replacing any previous run's
    /// contents. Returns the number of records written.
    async fn write(&self, records: &[EnrichedRecord]) -> Result<u64, PipelineError>;

    /// Short adapter name for logs and error messages.
    fn name(&self) -> &str;
}
