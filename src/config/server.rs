use crate::utils::error::{DatavizError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "serve")]
#[command(about = "Serve a directory over HTTP with correct content types for web assets")]
pub struct ServerConfig {
    #[arg(long, default_value = "localhost")]
    pub host: String,

    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Directory to serve; defaults to the directory containing this executable
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Extra content type mapping, e.g. --mime wasm=application/wasm
    #[arg(long = "mime", value_name = "EXT=TYPE", value_parser = parse_mime_override)]
    pub mime: Vec<(String, String)>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn resolve_root(&self) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => executable_dir()?,
        };

        if !root.is_dir() {
            return Err(DatavizError::InvalidConfigValueError {
                field: "root".to_string(),
                value: root.display().to_string(),
                reason: "Not a directory".to_string(),
            });
        }
        Ok(root.canonicalize()?)
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| DatavizError::MissingConfigError {
            field: "root".to_string(),
        })
}

fn parse_mime_override(raw: &str) -> std::result::Result<(String, String), String> {
    let (ext, content_type) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected EXT=TYPE, got '{}'", raw))?;
    let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
    let content_type = content_type.trim().to_string();
    if content_type.is_empty() {
        return Err(format!("missing content type in '{}'", raw));
    }
    Ok((ext, content_type))
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.host)?;
        if let Some(root) = &self.root {
            validation::validate_path("root", &root.to_string_lossy())?;
        }
        for (ext, _) in &self.mime {
            validation::validate_extension("mime", ext)?;
        }
        Ok(())
    }
}
