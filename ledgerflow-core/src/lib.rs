// ledgerflow-core/src/lib.rs

#![allow(missing_docs)]

// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for record extraction and persistence (Source, Sink).
pub mod ports;

// 2. Domain (Business core)
// Record types, enrichment rules, validation.
// Depends on NOTHING else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Technical implementations (DuckDB, CSV, embedded sample, config files).
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (run_pipeline, clean_artifacts).
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Allows importing the main error easily: use ledgerflow_core::PipelineError;
pub use error::PipelineError;
