// ledgerflow/src/commands/run.rs
//
// USE CASE: Run one ETL cycle. The external scheduler invokes this
// command per trigger; the process exit code is the run status.

use std::path::PathBuf;

use anyhow::Context;
use ledgerflow_core::application::run_pipeline;
use ledgerflow_core::infrastructure::adapters::{CsvSink, DuckDbSink, SampleSource};
use ledgerflow_core::infrastructure::config::load_pipeline_config;
use ledgerflow_core::ports::Sink;

pub async fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_pipeline_config(&project_dir).with_context(|| {
        format!(
            "Failed to load pipeline configuration from {:?}",
            project_dir
        )
    })?;
    println!("   Pipeline: {} (tax rate {})", config.name, config.tax_rate);

    // B. Instantiate the Sink Adapters (CSV + DuckDB)
    let out_dir = project_dir.join(&config.out_dir);
    let sinks: Vec<Box<dyn Sink>> = vec![
        Box::new(CsvSink::new(out_dir.join(&config.csv_filename))),
        Box::new(DuckDbSink::new(out_dir.join(&config.db_filename))),
    ];

    // C. Run the Pipeline (Application Layer)
    let source = SampleSource;
    let result = run_pipeline(&source, &sinks, &config, &project_dir).await;

    // Any pipeline error is a failed run: exit non-zero so the
    // scheduler records it as such.
    match result {
        Ok(run_res) => {
            println!("\n✨ SUCCESS! {} records loaded.", run_res.records_loaded);
            Ok(())
        }
        Err(e) => {
            eprintln!("\n💥 CRITICAL PIPELINE ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
