// ledgerflow/src/commands/inspect.rs
//
// USE CASE: Inspect the relational sink (schema + sample rows).

use chrono::NaiveDate;
use duckdb::types::ValueRef;
use duckdb::{Connection, Row};
use std::path::Path;

pub fn execute(db_path: String, table: String, limit: usize) -> anyhow::Result<()> {
    if !Path::new(&db_path).exists() {
        anyhow::bail!(
            "❌ Database not found at: {}\n👉 Have you run 'ledgerflow run'?",
            db_path
        );
    }

    let conn = Connection::open(&db_path)?;

    println!("\n🔍 Inspecting Table: '{}'", table);

    // Fetch column names
    let mut stmt_cols = conn.prepare(&format!("PRAGMA table_info({})", table))?;

    let column_names: Vec<String> = stmt_cols
        .query_map([], |row: &Row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;

    println!("   Columns: [{}]", column_names.join(", "));
    println!("   --- Rows (Limit {}) ---", limit);

    // Fetch sample rows
    let mut stmt = conn.prepare(&format!("SELECT * FROM {} LIMIT {}", table, limit))?;
    let mut rows = stmt.query([])?;

    while let Some(row) = rows.next()? {
        let values: Vec<String> = (0..column_names.len())
            .map(|i| match row.get_ref(i) {
                Ok(val) => render_value(val),
                Err(_) => "ERROR".to_string(),
            })
            .collect();

        println!("   ➜ {}", values.join(" | "));
    }

    Ok(())
}

/// Human-readable cell rendering. Text arrives as raw bytes and DATE as
/// days since the Unix epoch; Debug-printing those is unreadable.
fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Boolean(v) => v.to_string(),
        ValueRef::TinyInt(v) => v.to_string(),
        ValueRef::SmallInt(v) => v.to_string(),
        ValueRef::Int(v) => v.to_string(),
        ValueRef::BigInt(v) => v.to_string(),
        ValueRef::HugeInt(v) => v.to_string(),
        ValueRef::UTinyInt(v) => v.to_string(),
        ValueRef::USmallInt(v) => v.to_string(),
        ValueRef::UInt(v) => v.to_string(),
        ValueRef::UBigInt(v) => v.to_string(),
        ValueRef::Float(v) => v.to_string(),
        ValueRef::Double(v) => v.to_string(),
        ValueRef::Decimal(v) => v.to_string(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        // DATE is days since 1970-01-01; 719163 is that day's CE ordinal
        ValueRef::Date32(days) => NaiveDate::from_num_days_from_ce_opt(days + 719_163)
            .map(|d| d.to_string())
            .unwrap_or_else(|| format!("Date32({})", days)),
        other => format!("{:?}", other),
    }
}
