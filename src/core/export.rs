use crate::core::preview;
use crate::domain::model::DatasetKind;
use crate::domain::ports::{ConfigProvider, StatsSource, Storage};
use crate::utils::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub kind: DatasetKind,
    pub path: String,
    pub rows: usize,
    pub columns: usize,
}

/// Fetches each configured dataset and writes it out as CSV, one after the other.
pub struct ExportEngine<Src: StatsSource, S: Storage, C: ConfigProvider> {
    source: Src,
    storage: S,
    config: C,
}

impl<Src: StatsSource, S: Storage, C: ConfigProvider> ExportEngine<Src, S, C> {
    pub fn new(source: Src, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    /// Stops at the first failure. Files already written in this run stay on disk;
    /// the failing dataset's file is left as it was.
    pub async fn run(&self) -> Result<Vec<ExportedFile>> {
        tracing::info!(
            "Starting export for season {} ({} summary)",
            self.config.season(),
            self.config.summary_level()
        );

        let mut exported = Vec::with_capacity(self.config.datasets().len());
        for kind in self.config.datasets() {
            exported.push(self.export(*kind).await?);
        }

        tracing::info!("Export finished: {} file(s) written", exported.len());
        Ok(exported)
    }

    pub async fn export(&self, kind: DatasetKind) -> Result<ExportedFile> {
        let season = self.config.season();

        println!("Fetching {} for {}...", kind, season);
        let dataset = self.source.load(kind, season).await?;

        if self.config.preview_rows() > 0 {
            println!("{}", preview::render(&dataset, self.config.preview_rows()));
            println!();
        }

        let data = dataset.to_csv_bytes()?;
        tracing::debug!("Writing {} bytes to {}", data.len(), kind.file_name());
        self.storage.write_file(kind.file_name(), &data).await?;

        let path = Path::new(self.config.output_path())
            .join(kind.file_name())
            .display()
            .to_string();
        tracing::info!(
            "Wrote {} rows x {} columns to {}",
            dataset.len(),
            dataset.column_count(),
            path
        );

        Ok(ExportedFile {
            kind,
            path,
            rows: dataset.len(),
            columns: dataset.column_count(),
        })
    }
}
