// ledgerflow-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::Connection;
use std::path::PathBuf;

use crate::domain::record::EnrichedRecord;
use crate::error::PipelineError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::sink::Sink;

pub const TABLE: &str = "customer_purchases";

/// Relational sink backed by an embedded single-file DuckDB database.
///
/// The connection is scoped to a single write: open, create-if-absent,
/// truncate-then-insert inside one transaction, commit, close. The
/// write lock on the database file is released when the connection is
/// dropped, including on the error path.
pub struct DuckDbSink {
    db_path: PathBuf,
}

impl DuckDbSink {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    fn write_scoped(&self, records: &[EnrichedRecord]) -> Result<u64, InfrastructureError> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                customer_id     INTEGER PRIMARY KEY,
                name            VARCHAR NOT NULL,
                purchase_amount DECIMAL(12,2) NOT NULL,
                tax_amount      DECIMAL(12,2) NOT NULL,
                total_amount    DECIMAL(12,2) NOT NULL,
                category        VARCHAR NOT NULL,
                purchase_date   DATE NOT NULL
            )",
            TABLE
        ))?;

        // Truncate-then-insert: reruns are idempotent, no duplicate
        // accumulation. All or nothing within the transaction.
        let mut batch = String::new();
        batch.push_str("BEGIN TRANSACTION;\n");
        batch.push_str(&format!("DELETE FROM {};\n", TABLE));
        for record in records {
            batch.push_str(&insert_statement(record));
        }
        batch.push_str("COMMIT;\n");
        conn.execute_batch(&batch)?;

        let count: u64 = conn.query_row(&format!("SELECT count(*) FROM {}", TABLE), [], |row| {
            row.get(0)
        })?;

        Ok(count)
    }
}

/// Values are program-controlled (embedded sample + derived fields);
/// the only user-influenced text is the name, which gets quote-escaped.
fn insert_statement(record: &EnrichedRecord) -> String {
    format!(
        "INSERT INTO {} VALUES ({}, '{}', {:.2}, {:.2}, {:.2}, '{}', DATE '{}');\n",
        TABLE,
        record.customer_id,
        record.name.replace('\'', "''"),
        record.purchase_amount,
        record.tax_amount,
        record.total_amount,
        record.category,
        record.purchase_date.format("%Y-%m-%d"),
    )
}

#[async_trait]
impl Sink for DuckDbSink {
    async fn write(&self, records: &[EnrichedRecord]) -> Result<u64, PipelineError> {
        self.write_scoped(records)
            .map_err(PipelineError::Infrastructure)
    }

    fn name(&self) -> &str {
        "duckdb"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::configuration::PipelineConfig;
    use crate::infrastructure::adapters::sample::SampleSource;
    use crate::domain::transform::enrich_all;
    use crate::ports::source::Source;
    use anyhow::Result;
    use tempfile::tempdir;

    fn enriched_sample() -> Vec<EnrichedRecord> {
        let raw = SampleSource.extract().unwrap();
        enrich_all(&raw, &PipelineConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_write_creates_table_and_rows() -> Result<()> {
        let dir = tempdir()?;
        let db_path = dir.path().join("etl.duckdb");
        let sink = DuckDbSink::new(db_path.clone());

        let written = sink.write(&enriched_sample()).await?;
        assert_eq!(written, 5);

        let conn = Connection::open(&db_path)?;
        let (name, total, category): (String, f64, String) = conn.query_row(
            &format!(
                "SELECT name, total_amount::DOUBLE, category FROM {} WHERE customer_id = 1",
                TABLE
            ),
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;
        assert_eq!(name, "John Doe");
        assert!((total - 162.54).abs() < 1e-9);
        assert_eq!(category, "medium");
        Ok(())
    }

    #[tokio::test]
    async fn test_rerun_does_not_accumulate_rows() -> Result<()> {
        let dir = tempdir()?;
        let db_path = dir.path().join("etl.duckdb");
        let sink = DuckDbSink::new(db_path.clone());

        sink.write(&enriched_sample()).await?;
        let written_again = sink.write(&enriched_sample()).await?;
        assert_eq!(written_again, 5);

        let conn = Connection::open(&db_path)?;
        let count: u64 =
            conn.query_row(&format!("SELECT count(*) FROM {}", TABLE), [], |row| {
                row.get(0)
            })?;
        assert_eq!(count, 5);
        Ok(())
    }

    #[test]
    fn test_insert_statement_escapes_quotes() {
        let mut record = enriched_sample().remove(0);
        record.name = "O'Brien".to_string();
        let sql = insert_statement(&record);
        assert!(sql.contains("'O''Brien'"));
    }
}
