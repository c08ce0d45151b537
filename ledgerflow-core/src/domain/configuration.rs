// src/domain/configuration.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed constants driving the pipeline: tax rate, category thresholds,
/// output locations. Loaded once, passed around immutably so the
/// transform stays pure and testable in isolation.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PipelineConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Flat tax rate applied to every purchase (e.g. 0.08 = 8%).
    #[serde(rename = "tax-rate", default = "default_tax_rate")]
    pub tax_rate: Decimal,

    #[serde(default)]
    pub thresholds: CategoryThresholds,

    #[serde(rename = "out-dir", default = "default_out_dir")]
    pub out_dir: String,

    #[serde(rename = "csv-filename", default = "default_csv_filename")]
    pub csv_filename: String,

    #[serde(rename = "db-filename", default = "default_db_filename")]
    pub db_filename: String,
}

/// Category boundaries: amount < medium_from is "low",
/// amount < high_from is "medium", anything above is "high".
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct CategoryThresholds {
    #[serde(rename = "medium-from", default = "default_medium_from")]
    pub medium_from: Decimal,

    #[serde(rename = "high-from", default = "default_high_from")]
    pub high_from: Decimal,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            medium_from: default_medium_from(),
            high_from: default_high_from(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tax_rate: default_tax_rate(),
            thresholds: CategoryThresholds::default(),
            out_dir: default_out_dir(),
            csv_filename: default_csv_filename(),
            db_filename: default_db_filename(),
        }
    }
}

fn default_name() -> String {
    "ledgerflow".to_string()
}
fn default_tax_rate() -> Decimal {
    // 0.08
    Decimal::new(8, 2)
}
fn default_medium_from() -> Decimal {
    Decimal::new(50, 0)
}
fn default_high_from() -> Decimal {
    Decimal::new(200, 0)
}
fn default_out_dir() -> String {
    "target".to_string()
}
fn default_csv_filename() -> String {
    "transformed_data.csv".to_string()
}
fn default_db_filename() -> String {
    "etl_database.duckdb".to_string()
}
