pub mod etl;
pub mod export;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod sql;

pub use crate::domain::model::{ExportBundle, ExportOutput, ExportSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
