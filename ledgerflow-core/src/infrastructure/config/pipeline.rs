// ledgerflow-core/src/infrastructure/config/pipeline.rs

use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, instrument, warn};

use crate::domain::configuration::PipelineConfig;
use crate::infrastructure::error::InfrastructureError;

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_pipeline_config(project_dir: &Path) -> Result<PipelineConfig, InfrastructureError> {
    // 1. Discovery of the main file. The sample dataset is embedded in
    // the binary, so a missing config file simply means "all defaults".
    let mut config = match find_main_config(project_dir) {
        Some(config_path) => {
            info!(path = ?config_path, "Loading pipeline configuration");
            let content = fs::read_to_string(&config_path)?;
            serde_yaml::from_str::<PipelineConfig>(&content)?
        }
        None => {
            info!("No configuration file found, using built-in defaults");
            PipelineConfig::default()
        }
    };

    // 2. Override via environment variables (layering pattern).
    // Allows: LEDGERFLOW_OUT_DIR=/tmp/build ledgerflow run
    apply_env_overrides(&mut config)?;

    // 3. Constant validation (fail before the run ever begins).
    validate_config(&config)?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    let candidates = ["ledgerflow.yaml", "ledgerflow_conf.yaml"];
    candidates
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

fn apply_env_overrides(config: &mut PipelineConfig) -> Result<(), InfrastructureError> {
    if let Ok(val) = std::env::var("LEDGERFLOW_OUT_DIR") {
        info!(old = ?config.out_dir, new = ?val, "Overriding output dir via ENV");
        config.out_dir = val;
    }
    if let Ok(val) = std::env::var("LEDGERFLOW_TAX_RATE") {
        let rate = Decimal::from_str(&val).map_err(|e| {
            InfrastructureError::ConfigError(format!(
                "LEDGERFLOW_TAX_RATE '{}' is not a valid decimal: {}",
                val, e
            ))
        })?;
        warn!(old = ?config.tax_rate, new = ?rate, "Overriding tax rate via ENV");
        config.tax_rate = rate;
    }
    Ok(())
}

/// The spec's ConfigurationError class: malformed constants are fatal,
/// the run never begins.
fn validate_config(config: &PipelineConfig) -> Result<(), InfrastructureError> {
    if config.tax_rate.is_sign_negative() || config.tax_rate > Decimal::ONE {
        return Err(InfrastructureError::ConfigError(format!(
            "tax-rate must be within [0, 1], got {}",
            config.tax_rate
        )));
    }
    if config.thresholds.medium_from.is_sign_negative() {
        return Err(InfrastructureError::ConfigError(format!(
            "thresholds.medium-from must be >= 0, got {}",
            config.thresholds.medium_from
        )));
    }
    if config.thresholds.medium_from >= config.thresholds.high_from {
        return Err(InfrastructureError::ConfigError(format!(
            "thresholds must be increasing: medium-from {} >= high-from {}",
            config.thresholds.medium_from, config.thresholds.high_from
        )));
    }
    if config.csv_filename.is_empty() || config.db_filename.is_empty() || config.out_dir.is_empty()
    {
        return Err(InfrastructureError::ConfigError(
            "out-dir, csv-filename and db-filename must be non-empty".to_string(),
        ));
    }
    Ok(())
}
