// ledgerflow-core/src/ports/mod.rs

pub mod sink;
pub mod source;

pub use sink::Sink;
pub use source::Source;
