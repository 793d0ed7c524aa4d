use crate::domain::model::{ExportBundle, ExportOutput, ExportSummary, ExportTargets, MissingCellPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn companies_path(&self) -> &str;
    fn items_path(&self) -> &str;
    fn company_column(&self) -> &str;
    fn item_id_column(&self) -> &str;
    fn item_name_column(&self) -> &str;
    fn output_json_path(&self) -> &str;
    fn output_sql_path(&self) -> Option<&str>;

    fn missing_cells(&self) -> MissingCellPolicy {
        MissingCellPolicy::Error
    }

    fn targets(&self) -> ExportTargets {
        ExportTargets::default()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExportBundle>;
    async fn transform(&self, bundle: ExportBundle) -> Result<ExportOutput>;
    async fn load(&self, output: ExportOutput) -> Result<ExportSummary>;
}
