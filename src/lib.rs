pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{storage::LocalStorage, toml_config::TomlConfig};
pub use core::{etl::ExportEngine, pipeline::ExportPipeline};
pub use domain::model::{ExportBundle, ExportSummary, ExportTargets, Item, MissingCellPolicy};
pub use utils::error::{ExportError, Result};
