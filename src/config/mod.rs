pub mod cli;
pub mod server;
pub mod toml_config;

pub use cli::{ExportCli, ExportConfig};
pub use server::ServerConfig;
pub use toml_config::ExportFileConfig;
