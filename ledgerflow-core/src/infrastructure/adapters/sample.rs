// ledgerflow-core/src/infrastructure/adapters/sample.rs
//
// The production extraction adapter. The source is a fixed dataset
// embedded in the binary: no external I/O, no network, identical output
// on every invocation. In a real deployment this adapter would be
// replaced by an API, file, or database source behind the same port.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::record::RawRecord;
use crate::error::PipelineError;
use crate::ports::source::Source;

pub struct SampleSource;

impl Source for SampleSource {
    fn extract(&self) -> Result<Vec<RawRecord>, PipelineError> {
        Ok(sample_records())
    }

    fn name(&self) -> &str {
        "embedded-sample"
    }
}

fn sample_records() -> Vec<RawRecord> {
    let rows: [(i64, &str, i64, (i32, u32, u32)); 5] = [
        (1, "John Doe", 15050, (2024, 1, 1)),
        (2, "Jane Smith", 20000, (2024, 1, 2)),
        (3, "Bob Johnson", 7525, (2024, 1, 3)),
        (4, "Alice Brown", 30075, (2024, 1, 4)),
        (5, "Charlie Wilson", 12500, (2024, 1, 5)),
    ];

    rows.iter()
        .filter_map(|&(customer_id, name, cents, (y, m, d))| {
            Some(RawRecord {
                customer_id,
                name: name.to_string(),
                // Amounts stored as cents to keep the constant table exact
                purchase_amount: Decimal::new(cents, 2),
                purchase_date: NaiveDate::from_ymd_opt(y, m, d)?,
            })
        })
        .collect()
}
