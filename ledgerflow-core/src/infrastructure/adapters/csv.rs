// ledgerflow-core/src/infrastructure/adapters/csv.rs

use async_trait::async_trait;
use csv::Writer;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::domain::record::EnrichedRecord;
use crate::error::PipelineError;
use crate::infrastructure::fs::atomic_write;
use crate::ports::sink::Sink;

/// Column order is part of the external contract, do not reorder.
const HEADER: [&str; 7] = [
    "customer_id",
    "name",
    "purchase_amount",
    "tax_amount",
    "total_amount",
    "category",
    "purchase_date",
];

/// Tabular sink: header + one row per record, full overwrite each run.
/// Rows are serialized in memory first and persisted with an atomic
/// rename, so the file always exactly reflects one complete run.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn render(records: &[EnrichedRecord]) -> Result<Vec<u8>, PipelineError> {
        let mut writer = Writer::from_writer(Vec::new());
        writer
            .write_record(HEADER)
            .map_err(crate::infrastructure::error::InfrastructureError::Csv)?;

        for record in records {
            writer
                .write_record([
                    record.customer_id.to_string(),
                    record.name.clone(),
                    money(record.purchase_amount),
                    money(record.tax_amount),
                    money(record.total_amount),
                    record.category.to_string(),
                    record.purchase_date.format("%Y-%m-%d").to_string(),
                ])
                .map_err(crate::infrastructure::error::InfrastructureError::Csv)?;
        }

        writer
            .into_inner()
            .map_err(|e| PipelineError::InternalError(format!("CSV buffer flush: {}", e)))
    }
}

/// Currency rendering: always two fraction digits ("8.00", not "8").
fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

#[async_trait]
impl Sink for CsvSink {
    async fn write(&self, records: &[EnrichedRecord]) -> Result<u64, PipelineError> {
        let bytes = Self::render(records)?;
        atomic_write(&self.path, bytes)?;
        Ok(records.len() as u64)
    }

    fn name(&self) -> &str {
        "csv"
    }
}
