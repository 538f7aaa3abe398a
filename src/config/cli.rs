use crate::adapters::nflverse::DEFAULT_BASE_URL;
use crate::config::toml_config::ExportFileConfig;
use crate::core::preview::DEFAULT_PREVIEW_ROWS;
use crate::domain::model::{DatasetKind, SummaryLevel};
use crate::domain::ports::ConfigProvider;
use crate::domain::season::{current_season, DEFAULT_SEASON};
use crate::utils::error::{DatavizError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

const MAX_PREVIEW_ROWS: usize = 100;

#[derive(Debug, Clone, Parser)]
#[command(name = "nfl-export")]
#[command(about = "Download NFL player and team statistics for a season and save them as CSV")]
pub struct ExportCli {
    /// Season to export
    #[arg(long)]
    pub season: Option<i32>,

    /// Aggregation level of the published statistics
    #[arg(long, value_enum)]
    pub summary_level: Option<SummaryLevel>,

    /// Directory the CSV files are written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Rows shown in the console preview of each dataset (0 disables it)
    #[arg(long)]
    pub preview_rows: Option<usize>,

    /// Datasets to export, in order
    #[arg(long, value_enum, value_delimiter = ',')]
    pub datasets: Vec<DatasetKind>,

    /// Base URL of the statistics releases
    #[arg(long)]
    pub base_url: Option<String>,

    /// Optional TOML settings file; explicit flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Effective exporter settings after defaults, settings file and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub season: i32,
    pub summary_level: SummaryLevel,
    pub output_path: String,
    pub preview_rows: usize,
    pub datasets: Vec<DatasetKind>,
    pub base_url: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON,
            summary_level: SummaryLevel::default(),
            output_path: ".".to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            datasets: DatasetKind::ALL.to_vec(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn resolve(cli: &ExportCli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                ExportFileConfig::from_file(path)?
            }
            None => ExportFileConfig::default(),
        };
        Ok(Self::merge(&file, cli))
    }

    fn merge(file: &ExportFileConfig, cli: &ExportCli) -> Self {
        let defaults = Self::default();
        let export = file.export();

        let datasets = if !cli.datasets.is_empty() {
            cli.datasets.clone()
        } else {
            export.datasets.unwrap_or(defaults.datasets)
        };

        Self {
            season: cli.season.or(export.season).unwrap_or(defaults.season),
            summary_level: cli
                .summary_level
                .or(export.summary_level)
                .unwrap_or(defaults.summary_level),
            output_path: cli
                .output_path
                .clone()
                .or(export.output_path)
                .unwrap_or(defaults.output_path),
            preview_rows: cli
                .preview_rows
                .or(export.preview_rows)
                .unwrap_or(defaults.preview_rows),
            datasets: dedup_in_order(datasets),
            base_url: cli
                .base_url
                .clone()
                .or_else(|| file.base_url().map(str::to_string))
                .unwrap_or(defaults.base_url),
        }
    }
}

fn dedup_in_order(kinds: Vec<DatasetKind>) -> Vec<DatasetKind> {
    let mut seen = Vec::with_capacity(kinds.len());
    for kind in kinds {
        if !seen.contains(&kind) {
            seen.push(kind);
        }
    }
    seen
}

impl ConfigProvider for ExportConfig {
    fn season(&self) -> i32 {
        self.season
    }

    fn summary_level(&self) -> SummaryLevel {
        self.summary_level
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn preview_rows(&self) -> usize {
        self.preview_rows
    }

    fn datasets(&self) -> &[DatasetKind] {
        &self.datasets
    }
}

impl Validate for ExportConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_base_url("base_url", &self.base_url)?;
        validation::validate_season(
            "season",
            self.season,
            current_season(chrono::Local::now().date_naive()),
        )?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_range("preview_rows", self.preview_rows, 0, MAX_PREVIEW_ROWS)?;

        if self.datasets.is_empty() {
            return Err(DatavizError::MissingConfigError {
                field: "datasets".to_string(),
            });
        }
        Ok(())
    }
}
