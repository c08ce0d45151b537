// ledgerflow-core/src/domain/transform.rs
//
// Pure enrichment rules. No I/O, no state: every function here is a
// deterministic mapping from raw values to derived values.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::configuration::{CategoryThresholds, PipelineConfig};
use crate::domain::error::DomainError;
use crate::domain::record::{Category, EnrichedRecord, RawRecord};

/// Tax owed on a purchase: `round(amount * rate, 2)` with half-up
/// rounding to match currency semantics.
pub fn compute_tax(amount: Decimal, rate: Decimal) -> Decimal {
    (amount * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Spend bracket for an amount. Monotonic step function of the amount.
pub fn categorize(amount: Decimal, thresholds: &CategoryThresholds) -> Category {
    if amount < thresholds.medium_from {
        Category::Low
    } else if amount < thresholds.high_from {
        Category::Medium
    } else {
        Category::High
    }
}

/// Enrich a single raw record. A negative amount is a data-validity
/// error; the caller aborts the whole batch before anything is loaded.
pub fn enrich(record: &RawRecord, config: &PipelineConfig) -> Result<EnrichedRecord, DomainError> {
    if record.purchase_amount.is_sign_negative() && !record.purchase_amount.is_zero() {
        return Err(DomainError::InvalidRecord {
            customer_id: record.customer_id,
            amount: record.purchase_amount,
        });
    }

    let tax_amount = compute_tax(record.purchase_amount, config.tax_rate);
    let total_amount = record.purchase_amount + tax_amount;

    Ok(EnrichedRecord {
        customer_id: record.customer_id,
        name: record.name.clone(),
        purchase_amount: record.purchase_amount,
        tax_amount,
        total_amount,
        category: categorize(record.purchase_amount, &config.thresholds),
        purchase_date: record.purchase_date,
    })
}

/// Enrich a full batch, preserving input order. Fails on the first
/// invalid record: this pipeline processes a single small batch
/// atomically rather than partially loading.
pub fn enrich_all(
    records: &[RawRecord],
    config: &PipelineConfig,
) -> Result<Vec<EnrichedRecord>, DomainError> {
    records.iter().map(|r| enrich(r, config)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn raw(id: i64, amount: &str) -> RawRecord {
        RawRecord {
            customer_id: id,
            name: format!("Customer {}", id),
            purchase_amount: dec(amount),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_tax_is_rounded_to_two_decimals() {
        // 150.50 * 0.08 = 12.04 exactly
        assert_eq!(compute_tax(dec("150.50"), dec("0.08")), dec("12.04"));
        // 10.05 * 0.08 = 0.804 -> 0.80
        assert_eq!(compute_tax(dec("10.05"), dec("0.08")), dec("0.80"));
    }

    #[test]
    fn test_tax_midpoint_rounds_half_up() {
        // 64.3125 * 0.08 = 5.1450 -> half-up gives 5.15 (banker's would give 5.14)
        assert_eq!(compute_tax(dec("64.3125"), dec("0.08")), dec("5.15"));
    }

    #[test]
    fn test_zero_amount_yields_zero_tax_and_low() {
        let config = PipelineConfig::default();
        let enriched = enrich(&raw(1, "0"), &config).unwrap();
        assert_eq!(enriched.tax_amount, Decimal::ZERO);
        assert_eq!(enriched.total_amount, Decimal::ZERO);
        assert_eq!(enriched.category, Category::Low);
    }

    #[test]
    fn test_category_boundaries() {
        let t = CategoryThresholds::default();
        assert_eq!(categorize(dec("0"), &t), Category::Low);
        assert_eq!(categorize(dec("49.99"), &t), Category::Low);
        assert_eq!(categorize(dec("50"), &t), Category::Medium);
        assert_eq!(categorize(dec("199.99"), &t), Category::Medium);
        assert_eq!(categorize(dec("200"), &t), Category::High);
        assert_eq!(categorize(dec("300.75"), &t), Category::High);
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let config = PipelineConfig::default();
        let err = enrich(&raw(42, "-1.00"), &config).unwrap_err();
        match err {
            DomainError::InvalidRecord { customer_id, .. } => assert_eq!(customer_id, 42),
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_batch_aborts_on_first_invalid_record() {
        let config = PipelineConfig::default();
        let batch = vec![raw(1, "10.00"), raw(2, "-5.00"), raw(3, "20.00")];
        assert!(enrich_all(&batch, &config).is_err());
    }

    #[test]
    fn test_total_equals_amount_plus_tax() {
        let config = PipelineConfig::default();
        for amount in ["0.01", "49.99", "123.45", "999.99"] {
            let enriched = enrich(&raw(1, amount), &config).unwrap();
            assert_eq!(
                enriched.total_amount,
                enriched.purchase_amount + enriched.tax_amount
            );
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let config = PipelineConfig::default();
        let batch = vec![raw(3, "10.00"), raw(1, "20.00"), raw(2, "30.00")];
        let enriched = enrich_all(&batch, &config).unwrap();
        let ids: Vec<i64> = enriched.iter().map(|r| r.customer_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_reference_example() {
        // 100.00 @ 8% -> tax 8.00, total 108.00, category medium
        let config = PipelineConfig::default();
        let record = RawRecord {
            customer_id: 1,
            name: "Alice".to_string(),
            purchase_amount: dec("100.00"),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let enriched = enrich(&record, &config).unwrap();
        assert_eq!(enriched.tax_amount, dec("8.00"));
        assert_eq!(enriched.total_amount, dec("108.00"));
        assert_eq!(enriched.category, Category::Medium);
    }
}
