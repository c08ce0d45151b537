// ledgerflow/src/commands/mod.rs

pub mod clean;
pub mod inspect;
pub mod run;
