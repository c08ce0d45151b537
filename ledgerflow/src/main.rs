// ledgerflow/src/main.rs

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup Logging (Tracing)
    // RUST_LOG=debug ledgerflow run ... for details
    tracing_subscriber::fmt::init();

    let args = Cli::parse();

    match args.command {
        Commands::Run { project_dir } => commands::run::execute(project_dir).await,
        Commands::Clean { project_dir } => commands::clean::execute(project_dir),
        Commands::Inspect {
            db_path,
            table,
            limit,
        } => commands::inspect::execute(db_path, table, limit),
    }
}
