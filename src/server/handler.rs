use crate::server::listing;
use crate::server::mime::MimeRegistry;
use crate::server::path::{split_target, translate_path};
use chrono::{DateTime, NaiveDateTime, Utc};
use percent_encoding::percent_decode_str;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Transport-independent response produced by [`FileHandler::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl FileResponse {
    fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    fn error(status: u16, message: &str) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/html; charset=utf-8")
            .with_body(listing::render_error(status, message).into_bytes())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct FileHandler {
    root: PathBuf,
    mime: MimeRegistry,
}

impl FileHandler {
    pub fn new(root: PathBuf, mime: MimeRegistry) -> Self {
        Self { root, mime }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Answers one request. HEAD gets the same status and headers as GET; the
    /// transport is responsible for dropping the body.
    pub fn handle(&self, method: &str, target: &str, if_modified_since: Option<&str>) -> FileResponse {
        if method != "GET" && method != "HEAD" {
            return FileResponse::error(501, &format!("Unsupported method ({})", method));
        }

        let path = match translate_path(&self.root, target) {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("Rejected target {}: {}", target, e);
                return FileResponse::error(400, &e.to_string());
            }
        };

        let (request_path, query) = split_target(target);

        if path.is_dir() {
            if !request_path.ends_with('/') {
                let location = match query {
                    Some(q) => format!("{}/?{}", request_path, q),
                    None => format!("{}/", request_path),
                };
                return FileResponse::new(301).with_header("Location", location);
            }

            for index in INDEX_FILES {
                let candidate = path.join(index);
                if candidate.is_file() {
                    return self.serve_file(&candidate, if_modified_since);
                }
            }
            return self.list_directory(&path, request_path);
        }

        // a trailing slash names a directory
        if request_path.ends_with('/') {
            return FileResponse::error(404, "File not found");
        }

        self.serve_file(&path, if_modified_since)
    }

    fn serve_file(&self, path: &Path, if_modified_since: Option<&str>) -> FileResponse {
        let metadata = match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => return FileResponse::error(404, "File not found"),
            Err(e) => return io_error_response(path, e),
        };

        let modified = metadata
            .modified()
            .ok()
            .map(|time| truncate_to_seconds(DateTime::<Utc>::from(time)));

        if let (Some(modified), Some(since)) = (modified, if_modified_since.and_then(parse_http_date)) {
            if modified <= since {
                return FileResponse::new(304).with_header("Last-Modified", format_http_date(modified));
            }
        }

        let body = match fs::read(path) {
            Ok(body) => body,
            Err(e) => return io_error_response(path, e),
        };

        let mut response = FileResponse::new(200)
            .with_header("Content-Type", self.mime.content_type(path))
            .with_body(body);
        if let Some(modified) = modified {
            response = response.with_header("Last-Modified", format_http_date(modified));
        }
        response
    }

    fn list_directory(&self, dir: &Path, request_path: &str) -> FileResponse {
        let display_path = percent_decode_str(request_path).decode_utf8_lossy();
        match listing::render_directory(dir, &display_path) {
            Ok(html) => FileResponse::new(200)
                .with_header("Content-Type", "text/html; charset=utf-8")
                .with_body(html.into_bytes()),
            Err(e) => io_error_response(dir, e),
        }
    }
}

fn io_error_response(path: &Path, e: std::io::Error) -> FileResponse {
    match e.kind() {
        ErrorKind::NotFound => FileResponse::error(404, "File not found"),
        ErrorKind::PermissionDenied => FileResponse::error(403, "Permission denied"),
        _ => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            FileResponse::error(500, "Internal server error")
        }
    }
}

fn truncate_to_seconds(time: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(time.timestamp(), 0).unwrap_or(time)
}

pub fn format_http_date(time: DateTime<Utc>) -> String {
    time.format(HTTP_DATE_FORMAT).to_string()
}

pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), HTTP_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
