pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{
    engine::{RunSummary, ScoutEngine},
    extraction::VersionExtractor,
    pipeline::VendorPipeline,
};
pub use domain::model::{ReportFormat, ReportOutcome, VendorEntry, VendorReport};
pub use utils::error::{Result, ScoutError};
