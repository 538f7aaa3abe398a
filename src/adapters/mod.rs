// Adapters layer: concrete implementations for external systems (http data source, local storage).

pub mod nflverse;
pub mod storage;
