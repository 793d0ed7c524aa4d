use crate::adapters::tabular::{read_table, Table};
use crate::core::export::export_json;
use crate::core::extract::{load_companies, load_items};
use crate::core::report::render_report;
use crate::core::sql::render_sql_script;
use crate::core::{ConfigProvider, ExportBundle, ExportOutput, ExportSummary, Pipeline, Storage};
use crate::utils::error::{ExportError, Result};

pub struct ExportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn read_source(&self, path: &str) -> Result<Table> {
        let bytes = self.storage.read_file(path).await.map_err(|e| match e {
            ExportError::IoError(io) => ExportError::source_read(path, io),
            other => other,
        })?;
        let table = read_table(path, bytes)?;
        tracing::debug!(
            "'{}': headers {:?}, {} data rows",
            table.path(),
            table.headers(),
            table.rows().len()
        );
        Ok(table)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<S, C> {
    async fn extract(&self) -> Result<ExportBundle> {
        let policy = self.config.missing_cells();

        // Both sources are fully read before anything is rendered
        tracing::debug!("Reading companies from '{}'", self.config.companies_path());
        let companies_table = self.read_source(self.config.companies_path()).await?;
        let constructions = load_companies(&companies_table, self.config.company_column(), policy)?;

        tracing::debug!("Reading items from '{}'", self.config.items_path());
        let items_table = self.read_source(self.config.items_path()).await?;
        let items = load_items(
            &items_table,
            self.config.item_id_column(),
            self.config.item_name_column(),
            policy,
        )?;

        Ok(ExportBundle {
            constructions,
            items,
        })
    }

    async fn transform(&self, bundle: ExportBundle) -> Result<ExportOutput> {
        let sql = render_sql_script(&bundle, &self.config.targets());
        let report = render_report(&bundle, &sql);

        Ok(ExportOutput {
            bundle,
            report,
            sql,
        })
    }

    async fn load(&self, output: ExportOutput) -> Result<ExportSummary> {
        let json_path = self.config.output_json_path().to_string();
        export_json(&self.storage, &output.bundle, &json_path).await?;

        let sql_path = match self.config.output_sql_path() {
            Some(path) => {
                tracing::debug!("Writing SQL script to '{}'", path);
                self.storage.write_file(path, output.sql.as_bytes()).await?;
                Some(path.to_string())
            }
            None => None,
        };

        Ok(ExportSummary {
            report: output.report,
            json_path,
            sql_path,
            company_count: output.bundle.constructions.len(),
            item_count: output.bundle.items.len(),
        })
    }
}
