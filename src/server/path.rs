//! Request target to filesystem path translation.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Request target must start with '/'")]
    NotOriginForm,

    #[error("Request path is not valid UTF-8 after decoding")]
    InvalidEncoding,

    #[error("Request path contains a forbidden character")]
    ForbiddenCharacter,
}

/// Splits `/a/b?x=1#frag` into the path and the query (fragment dropped).
pub fn split_target(target: &str) -> (&str, Option<&str>) {
    let without_fragment = target.split_once('#').map_or(target, |(head, _)| head);
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    }
}

/// Maps a request target onto `root`. `.` and `..` segments are resolved lexically
/// and can never climb above `root`.
pub fn translate_path(root: &Path, target: &str) -> Result<PathBuf, PathError> {
    if !target.starts_with('/') {
        return Err(PathError::NotOriginForm);
    }

    let (path, _) = split_target(target);
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map_err(|_| PathError::InvalidEncoding)?;

    if decoded.contains('\0') {
        return Err(PathError::ForbiddenCharacter);
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s if !is_plain_segment(s) => return Err(PathError::ForbiddenCharacter),
            s => segments.push(s),
        }
    }

    let mut resolved = root.to_path_buf();
    resolved.extend(segments);
    Ok(resolved)
}

/// A segment must name a single entry: no drive prefix (`C:`), no separators of
/// either kind, nothing that `PathBuf::push` would treat as a new root.
fn is_plain_segment(segment: &str) -> bool {
    if segment.contains(['\\', ':']) {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/srv/site")
    }

    #[test]
    fn test_split_target() {
        assert_eq!(split_target("/a/b"), ("/a/b", None));
        assert_eq!(split_target("/a?x=1"), ("/a", Some("x=1")));
        assert_eq!(split_target("/a?x=1#top"), ("/a", Some("x=1")));
        assert_eq!(split_target("/a#top?x"), ("/a", None));
    }

    #[test]
    fn test_plain_paths() {
        assert_eq!(translate_path(&root(), "/").unwrap(), root());
        assert_eq!(
            translate_path(&root(), "/css/style.css").unwrap(),
            root().join("css").join("style.css")
        );
        assert_eq!(
            translate_path(&root(), "/data/playerdata.csv?v=2").unwrap(),
            root().join("data").join("playerdata.csv")
        );
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(
            translate_path(&root(), "/my%20file.json").unwrap(),
            root().join("my file.json")
        );
        assert_eq!(
            translate_path(&root(), "/caf%C3%A9.txt").unwrap(),
            root().join("café.txt")
        );
    }

    #[test]
    fn test_traversal_stays_under_root() {
        assert_eq!(
            translate_path(&root(), "/../../etc/passwd").unwrap(),
            root().join("etc").join("passwd")
        );
        assert_eq!(
            translate_path(&root(), "/a/./b/../c").unwrap(),
            root().join("a").join("c")
        );
        assert_eq!(
            translate_path(&root(), "/%2e%2e/secret").unwrap(),
            root().join("secret")
        );
    }

    #[test]
    fn test_rejected_targets() {
        assert_eq!(
            translate_path(&root(), "style.css"),
            Err(PathError::NotOriginForm)
        );
        assert_eq!(translate_path(&root(), "*"), Err(PathError::NotOriginForm));
        assert_eq!(
            translate_path(&root(), "/%ff%fe"),
            Err(PathError::InvalidEncoding)
        );
        assert_eq!(
            translate_path(&root(), "/a%00b"),
            Err(PathError::ForbiddenCharacter)
        );
        assert_eq!(
            translate_path(&root(), "/..%5C..%5Cwindows"),
            Err(PathError::ForbiddenCharacter)
        );
    }

    #[test]
    fn test_drive_segments_are_rejected() {
        for target in [
            "/C:/Windows/win.ini",
            "/c%3A/Windows/win.ini",
            "/assets/D:secret.txt",
            "/C%3A%5CWindows",
        ] {
            assert_eq!(
                translate_path(&root(), target),
                Err(PathError::ForbiddenCharacter),
                "{}",
                target
            );
        }
    }

    #[test]
    fn test_plain_segment() {
        assert!(is_plain_segment("style.css"));
        assert!(is_plain_segment("my file.json"));
        assert!(!is_plain_segment("C:"));
        assert!(!is_plain_segment("a\\b"));
    }
}
