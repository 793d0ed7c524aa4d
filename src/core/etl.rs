use crate::core::{ExportSummary, Pipeline};
use crate::utils::error::Result;
use std::time::Instant;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order; the first error aborts the run.
    pub async fn run(&self) -> Result<ExportSummary> {
        let started = Instant::now();
        tracing::info!("Starting export");

        tracing::info!("Extracting data...");
        let bundle = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} companies and {} items",
            bundle.constructions.len(),
            bundle.items.len()
        );

        tracing::info!("Rendering report and SQL...");
        let output = self.pipeline.transform(bundle).await?;

        tracing::info!("Writing output files...");
        let summary = self.pipeline.load(output).await?;

        tracing::info!("Export finished in {:?}", started.elapsed());
        Ok(summary)
    }
}
