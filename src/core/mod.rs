pub mod export;
pub mod preview;

pub use crate::domain::model::{Dataset, DatasetKind, SummaryLevel};
pub use crate::domain::ports::{ConfigProvider, StatsSource, Storage};
pub use crate::utils::error::Result;
