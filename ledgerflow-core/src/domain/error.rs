// ledgerflow-core/src/domain/error.rs

use miette::Diagnostic;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid record: customer {customer_id} has negative purchase_amount {amount}")]
    #[diagnostic(
        code(ledgerflow::domain::invalid_record),
        help("purchase_amount must be >= 0. The whole run is aborted, nothing was loaded.")
    )]
    InvalidRecord { customer_id: i64, amount: Decimal },

    #[error("Record count mismatch on sink '{sink}': expected {expected}, loaded {actual}")]
    #[diagnostic(
        code(ledgerflow::domain::count_mismatch),
        help("Every sink must persist exactly the extracted record count.")
    )]
    CountMismatch {
        sink: String,
        expected: u64,
        actual: u64,
    },
}
