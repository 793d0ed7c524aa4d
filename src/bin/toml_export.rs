use anyhow::Context;
use clap::Parser;
use excel_sql_export::core::ConfigProvider;
use excel_sql_export::utils::{logger, validation::Validate};
use excel_sql_export::{ExportEngine, ExportPipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-export")]
#[command(about = "Spreadsheet to SQL/JSON export driven by a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "export.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,

    /// Show the resolved plan without reading any source
    #[arg(long)]
    dry_run: bool,
}

fn display_plan(config: &TomlConfig) {
    let targets = config.targets();
    println!("Base directory:  {}", config.base_dir());
    println!(
        "Companies:       {} [{}] -> {}({})",
        config.companies_path(),
        config.company_column(),
        targets.companies_table,
        targets.company_column
    );
    println!(
        "Items:           {} [{}, {}] -> {}({}, {})",
        config.items_path(),
        config.item_id_column(),
        config.item_name_column(),
        targets.items_table,
        targets.item_id_column,
        targets.item_name_column
    );
    println!("Missing cells:   {:?}", config.missing_cells());
    println!("JSON output:     {}", config.output_json_path());
    println!(
        "SQL output:      {}",
        config.output_sql_path().unwrap_or("(disabled)")
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init(args.verbose, args.log_json);

    tracing::info!("Loading configuration from: {}", args.config);
    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if args.dry_run {
        tracing::info!("Dry run, no files will be read or written");
        display_plan(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.base_dir());
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
