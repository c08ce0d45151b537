// ledgerflow-core/src/domain/record.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spend bracket derived from the purchase amount at transform time.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Low,
    Medium,
    High,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Low => "low",
            Category::Medium => "medium",
            Category::High => "high",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A customer purchase as it leaves extraction. All fields populated, pre-tax.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawRecord {
    pub customer_id: i64,
    pub name: String,
    pub purchase_amount: Decimal,
    pub purchase_date: NaiveDate,
}

/// A purchase after enrichment. Immutable once produced: the load step
/// only persists it, never mutates it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub customer_id: i64,
    pub name: String,
    pub purchase_amount: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub category: Category,
    pub purchase_date: NaiveDate,
}
