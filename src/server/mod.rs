//! Development static file server.

pub mod file_server;
pub mod handler;
pub mod listing;
pub mod mime;
pub mod path;

pub use file_server::FileServer;
pub use handler::{FileHandler, FileResponse};
pub use mime::MimeRegistry;
