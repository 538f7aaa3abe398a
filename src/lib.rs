pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{nflverse::NflverseSource, storage::LocalStorage};
pub use config::{ExportCli, ExportConfig, ServerConfig};
pub use core::export::{ExportEngine, ExportedFile};
pub use server::{FileHandler, FileServer, MimeRegistry};
pub use utils::error::{DatavizError, Result};
