// ledgerflow-core/src/application/pipeline.rs

use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::configuration::PipelineConfig;
use crate::domain::error::DomainError;
use crate::domain::transform::enrich_all;
use crate::error::PipelineError;
use crate::ports::sink::Sink;
use crate::ports::source::Source;

/// Summary of a completed run. Failed runs never produce one: every
/// error propagates as `Err` and the scheduler reads the exit status,
/// so a summary file on disk always describes a successful run.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RunResult {
    pub records_extracted: u64,
    pub records_transformed: u64,
    pub records_loaded: u64,
}

/// Run one complete extract -> transform -> load cycle.
///
/// Strictly sequential: no internal parallelism, no inter-step queue.
/// The external scheduler is responsible for serializing triggers; the
/// only state shared between runs is the two sink files themselves.
/// Any error aborts the run before (or during) load and propagates up
/// as the run's failure status.
pub async fn run_pipeline<S>(
    source: &S,
    sinks: &[Box<dyn Sink>],
    config: &PipelineConfig,
    project_dir: &Path,
) -> Result<RunResult, PipelineError>
where
    S: Source,
{
    println!("🚀 Starting ETL Pipeline...");
    let start_time = std::time::Instant::now();

    // 1. SETUP (Infra/IO)
    let out_dir = project_dir.join(&config.out_dir);
    if !out_dir.exists() {
        fs::create_dir_all(&out_dir)?;
    }

    // 2. EXTRACT
    println!("📥 Extracting from '{}'...", source.name());
    let raw_records = source.extract()?;
    let extracted = raw_records.len() as u64;
    info!(records = extracted, "Extraction complete");

    // 3. TRANSFORM (pure, order-preserving, atomic per batch)
    println!("🧮 Transforming {} records...", extracted);
    let enriched = enrich_all(&raw_records, config).map_err(PipelineError::Domain)?;
    let transformed = enriched.len() as u64;

    // 4. LOAD (each sink gets the full batch, sequentially)
    let mut loaded = 0;
    for sink in sinks {
        println!("💾 Loading into '{}' sink...", sink.name());
        let written = sink.write(&enriched).await?;

        // Stage-count validation: every sink must persist the whole batch.
        if written != extracted {
            return Err(PipelineError::Domain(DomainError::CountMismatch {
                sink: sink.name().to_string(),
                expected: extracted,
                actual: written,
            }));
        }
        loaded = written;
        println!("    ✅ {} rows written", written);
    }

    // 5. FINALIZE
    let result = RunResult {
        records_extracted: extracted,
        records_transformed: transformed,
        records_loaded: loaded,
    };
    save_json(&out_dir.join("run_summary.json"), &result)?;

    let duration = start_time.elapsed();
    println!(
        "✨ Done in {:.2}s. {} records through {} sinks.",
        duration.as_secs_f64(),
        extracted,
        sinks.len()
    );

    Ok(result)
}

fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), PipelineError> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| PipelineError::InternalError(format!("Serialization: {}", e)))?;
    crate::infrastructure::fs::atomic_write(path, content)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::record::{EnrichedRecord, RawRecord};
    use crate::infrastructure::adapters::sample::SampleSource;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    // --- MOCK SINK ---
    #[derive(Clone)]
    struct MemorySink {
        pub captured: Arc<Mutex<Vec<Vec<EnrichedRecord>>>>,
        pub short_write: bool,
    }

    impl MemorySink {
        fn new() -> Self {
            Self {
                captured: Arc::new(Mutex::new(Vec::new())),
                short_write: false,
            }
        }
    }

    #[async_trait]
    impl Sink for MemorySink {
        async fn write(&self, records: &[EnrichedRecord]) -> Result<u64, PipelineError> {
            self.captured.lock().unwrap().push(records.to_vec());
            if self.short_write {
                Ok(records.len() as u64 - 1)
            } else {
                Ok(records.len() as u64)
            }
        }
        fn name(&self) -> &str {
            "memory"
        }
    }

    struct NegativeSource;
    impl Source for NegativeSource {
        fn extract(&self) -> Result<Vec<RawRecord>, PipelineError> {
            Ok(vec![RawRecord {
                customer_id: 99,
                name: "Bad Record".to_string(),
                purchase_amount: Decimal::new(-100, 2),
                purchase_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            }])
        }
        fn name(&self) -> &str {
            "negative"
        }
    }

    #[tokio::test]
    async fn test_run_pipeline_end_to_end() {
        let dir = tempdir().unwrap();
        let sink = MemorySink::new();
        let sinks: Vec<Box<dyn Sink>> = vec![Box::new(sink.clone())];
        let config = PipelineConfig::default();

        let result = run_pipeline(&SampleSource, &sinks, &config, dir.path())
            .await
            .unwrap();

        assert_eq!(result.records_extracted, 5);
        assert_eq!(result.records_transformed, 5);
        assert_eq!(result.records_loaded, 5);

        // Order preservation: n-th output corresponds to n-th input
        let captured = sink.captured.lock().unwrap();
        let ids: Vec<i64> = captured[0].iter().map(|r| r.customer_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        // Run summary persisted and parseable
        let summary_path = dir.path().join(&config.out_dir).join("run_summary.json");
        let summary: RunResult =
            serde_json::from_str(&std::fs::read_to_string(summary_path).unwrap()).unwrap();
        assert_eq!(summary.records_loaded, 5);
    }

    #[tokio::test]
    async fn test_invalid_record_aborts_before_any_load() {
        let dir = tempdir().unwrap();
        let sink = MemorySink::new();
        let sinks: Vec<Box<dyn Sink>> = vec![Box::new(sink.clone())];
        let config = PipelineConfig::default();

        let result = run_pipeline(&NegativeSource, &sinks, &config, dir.path()).await;
        assert!(result.is_err());

        // Nothing reached the sink
        assert!(sink.captured.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sink_count_mismatch_fails_the_run() {
        let dir = tempdir().unwrap();
        let mut sink = MemorySink::new();
        sink.short_write = true;
        let sinks: Vec<Box<dyn Sink>> = vec![Box::new(sink)];
        let config = PipelineConfig::default();

        let err = run_pipeline(&SampleSource, &sinks, &config, dir.path())
            .await
            .unwrap_err();
        match err {
            PipelineError::Domain(DomainError::CountMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 5);
                assert_eq!(actual, 4);
            }
            other => panic!("Expected CountMismatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_both_sinks_receive_the_same_batch() {
        let dir = tempdir().unwrap();
        let first = MemorySink::new();
        let second = MemorySink::new();
        let sinks: Vec<Box<dyn Sink>> =
            vec![Box::new(first.clone()), Box::new(second.clone())];
        let config = PipelineConfig::default();

        run_pipeline(&SampleSource, &sinks, &config, dir.path())
            .await
            .unwrap();

        let a = first.captured.lock().unwrap();
        let b = second.captured.lock().unwrap();
        assert_eq!(a[0], b[0]);
    }
}
