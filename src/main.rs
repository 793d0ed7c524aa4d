use clap::Parser;
use excel_sql_export::utils::{logger, validation::Validate};
use excel_sql_export::{CliConfig, ExportEngine, ExportPipeline, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init(config.verbose, config.log_json);

    tracing::info!("Starting excel-sql-export");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(config.base_dir.clone());
    let base_dir = storage.resolve("");
    let engine = ExportEngine::new(ExportPipeline::new(storage, config));

    match engine.run().await {
        Ok(summary) => {
            print!("{}", summary.report);
            println!(
                "\n\nJSON saved to: {}",
                base_dir.join(&summary.json_path).display()
            );
            if let Some(sql_path) = &summary.sql_path {
                println!("SQL saved to: {}", base_dir.join(sql_path).display());
            }
        }
        Err(e) => {
            tracing::error!(
                "Export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
