// ledgerflow-core/src/infrastructure/adapters/mod.rs

pub mod csv;
pub mod duckdb;
pub mod sample;

// `self::` avoids ambiguity with the extern crates of the same name
pub use self::csv::CsvSink;
pub use self::duckdb::DuckDbSink;
pub use self::sample::SampleSource;
