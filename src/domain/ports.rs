use crate::domain::model::{Dataset, DatasetKind, SummaryLevel};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Replaces the whole file; existing content is never appended to.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn season(&self) -> i32;
    fn summary_level(&self) -> SummaryLevel;
    fn output_path(&self) -> &str;
    fn preview_rows(&self) -> usize;
    fn datasets(&self) -> &[DatasetKind];
}

/// Access to published season statistics.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn load_player_stats(&self, season: i32) -> Result<Dataset>;
    async fn load_team_stats(&self, season: i32) -> Result<Dataset>;

    async fn load(&self, kind: DatasetKind, season: i32) -> Result<Dataset> {
        match kind {
            DatasetKind::PlayerStats => self.load_player_stats(season).await,
            DatasetKind::TeamStats => self.load_team_stats(season).await,
        }
    }
}
