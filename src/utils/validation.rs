use crate::domain::season::FIRST_SEASON;
use crate::utils::error::{DatavizError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DatavizError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Release file names get appended to the base URL, so it must be a plain
/// http(s) prefix without query or fragment.
pub fn validate_base_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_url(field_name, url_str)?;

    let url = Url::parse(url_str).map_err(|e| DatavizError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    if url.host_str().is_none() {
        return Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Base URL must include a host".to_string(),
        });
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Base URL cannot carry a query string or fragment".to_string(),
        });
    }

    Ok(())
}

/// `latest` is the season in progress; seasons before 1999 were never published.
pub fn validate_season(field_name: &str, season: i32, latest: i32) -> Result<()> {
    if season < FIRST_SEASON {
        return Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: season.to_string(),
            reason: format!("Statistics start with the {} season", FIRST_SEASON),
        });
    }

    if season > latest {
        return Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: season.to_string(),
            reason: format!("Season has not started yet; latest is {}", latest),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks a bare file extension such as `js` or `wasm` (no dot, no separators).
pub fn validate_extension(field_name: &str, ext: &str) -> Result<()> {
    let valid = !ext.is_empty()
        && ext
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '+');
    if !valid {
        return Err(DatavizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: ext.to_string(),
            reason: "Extension must be non-empty and contain only letters, digits, '-', '_' or '+'"
                .to_string(),
        });
    }
    Ok(())
}
