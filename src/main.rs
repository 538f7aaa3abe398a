use clap::Parser;
use dataviz_tools::utils::{logger, validation::Validate};
use dataviz_tools::{DatavizError, ExportCli, ExportConfig, ExportEngine, LocalStorage, NflverseSource};

fn fail(e: &DatavizError) -> ! {
    tracing::error!("❌ Export failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = ExportCli::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.log_format);
    tracing::info!("Starting nfl-export");

    let config = match ExportConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    if cli.verbose {
        tracing::debug!("Export config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let source = NflverseSource::new(config.base_url.clone(), config.summary_level);
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = ExportEngine::new(source, storage, config);

    match engine.run().await {
        Ok(files) => {
            for file in files {
                println!(
                    "✅ Saved {} ({} rows x {} columns) to {}",
                    file.kind, file.rows, file.columns, file.path
                );
            }
        }
        Err(e) => fail(&e),
    }
}
