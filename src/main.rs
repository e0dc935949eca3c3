use clap::Parser;
use version_scout::core::ConfigProvider;
use version_scout::utils::error::ErrorSeverity;
use version_scout::utils::{logger, validation::Validate};
use version_scout::{CliConfig, LocalStorage, ScoutEngine, VendorPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting version-scout CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = VendorPipeline::from_config(&config, storage)?;
    let engine = ScoutEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Scanned {} vendors: {} with versions, {} without, {} fetch failures",
                summary.vendors,
                summary.with_versions,
                summary.without_versions,
                summary.fetch_failures
            );
            println!("✅ Version scan completed!");
            println!("📁 Report saved to: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!("❌ Version scan failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
