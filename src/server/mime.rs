//! Content-Type resolution.
//!
//! Lookups fall through to the `mime_guess` database, except for the web-asset and
//! data extensions below, whose platform defaults are wrong or missing on some systems.

use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub const WEB_ASSET_OVERRIDES: [(&str, &str); 5] = [
    ("js", "application/javascript"),
    ("mjs", "application/javascript"),
    ("json", "application/json"),
    ("css", "text/css"),
    ("csv", "text/csv"),
];

#[derive(Debug, Clone)]
pub struct MimeRegistry {
    overrides: HashMap<String, String>,
}

impl MimeRegistry {
    /// Platform table only.
    pub fn platform() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::platform();
        for (ext, content_type) in WEB_ASSET_OVERRIDES {
            registry.insert(ext, content_type);
        }
        registry
    }

    /// Registers an override; `ext` may carry a leading dot and any case.
    pub fn insert(&mut self, ext: &str, content_type: &str) {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        self.overrides.insert(ext, content_type.to_string());
    }

    pub fn content_type(&self, path: &Path) -> &str {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        if let Some(content_type) = ext.and_then(|ext| self.overrides.get(&ext)) {
            return content_type;
        }

        mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

impl Default for MimeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
