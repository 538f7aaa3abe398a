use crate::domain::model::{Dataset, DatasetKind, SummaryLevel};
use crate::domain::ports::StatsSource;
use crate::domain::season;
use crate::utils::error::{DatavizError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://github.com/nflverse/nflverse-data/releases/download";

/// Reads the season statistics CSV files attached to the nflverse data releases.
pub struct NflverseSource {
    client: Client,
    base_url: String,
    summary_level: SummaryLevel,
}

impl NflverseSource {
    pub fn new(base_url: impl Into<String>, summary_level: SummaryLevel) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            summary_level,
        }
    }

    pub fn file_url(&self, kind: DatasetKind, season: i32) -> String {
        let release = kind.release();
        format!(
            "{}/{}/{}_{}_{}.csv",
            self.base_url.trim_end_matches('/'),
            release,
            release,
            self.summary_level.file_token(),
            season
        )
    }

    async fn fetch(&self, kind: DatasetKind, season: i32) -> Result<Dataset> {
        season::validate_season(season)?;

        let url = self.file_url(kind, season);
        tracing::debug!("Downloading {} from: {}", kind, url);
        let response = self.client.get(&url).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(DatavizError::HttpStatusError {
                url,
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes", body.len());

        let dataset = Dataset::from_csv_reader(body.as_ref())?;
        tracing::info!(
            "Loaded {} for {}: {} rows x {} columns",
            kind,
            season,
            dataset.len(),
            dataset.column_count()
        );
        Ok(dataset)
    }
}

#[async_trait]
impl StatsSource for NflverseSource {
    async fn load_player_stats(&self, season: i32) -> Result<Dataset> {
        self.fetch(DatasetKind::PlayerStats, season).await
    }

    async fn load_team_stats(&self, season: i32) -> Result<Dataset> {
        self.fetch(DatasetKind::TeamStats, season).await
    }
}
