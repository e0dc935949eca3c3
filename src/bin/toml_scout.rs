use anyhow::Context;
use clap::Parser;
use version_scout::adapters::vendor_list::CsvVendorList;
use version_scout::core::{ConfigProvider, VendorSource};
use version_scout::utils::{logger, validation::Validate};
use version_scout::{LocalStorage, ScoutEngine, TomlConfig, VendorPipeline};

#[derive(Parser)]
#[command(name = "toml-scout")]
#[command(about = "Version scan driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "scout-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Dry run - list vendors and settings without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based version scan");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    config
        .validate()
        .with_context(|| format!("invalid configuration in '{}'", args.config))?;

    if args.dry_run {
        return dry_run(&config);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = VendorPipeline::from_config(&config, storage)?;
    let summary = ScoutEngine::new(pipeline).run().await?;

    println!("✅ Scanned {} vendors ({} fetch failures)", summary.vendors, summary.fetch_failures);
    println!("📁 Report saved to: {}", summary.output_path);

    Ok(())
}

fn dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let vendors = CsvVendorList::new(config.vendors_file())
        .vendors()
        .with_context(|| format!("failed to read vendor list '{}'", config.vendors_file()))?;

    println!("🔍 Dry run analysis");
    println!("  Vendor list: {} ({} vendors)", config.vendors_file(), vendors.len());
    println!("  Timeout: {}s", config.timeout_seconds());
    println!("  Min line length: {}", config.min_line_length());
    if !config.extra_denylist().is_empty() {
        println!("  Extra denylist: {}", config.extra_denylist().join(", "));
    }
    if let Some(as_of) = config.as_of() {
        println!("  Dates compared against: {}", as_of);
    }
    println!(
        "  Report: {}/{} ({:?})",
        config.output_path(),
        config.report_filename(),
        config.report_format()
    );

    println!();
    println!("📋 Vendors:");
    for entry in &vendors {
        println!("  {} -> {}", entry.vendor, entry.url);
    }

    println!();
    println!("✅ Dry run analysis complete. Nothing was fetched.");

    Ok(())
}
