//! HTML pages generated by the server: directory listings and error bodies.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fs;
use std::io;
use std::path::Path;

/// Characters escaped in listing hrefs; `/` is kept so directory links stay relative.
const HREF_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

/// Lists `dir`, sorted case-insensitively, with directories suffixed by `/`.
/// `display_path` is the decoded request path shown in the title.
pub fn render_directory(dir: &Path, display_path: &str) -> io::Result<String> {
    let mut entries: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        // follows symlinks
        if entry.path().is_dir() {
            entries.push(format!("{}/", name));
        } else {
            entries.push(name);
        }
    }
    entries.sort_by_key(|name| name.to_lowercase());

    let title = format!("Directory listing for {}", html_escape(display_path));
    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n</head>\n<body>\n", title));
    html.push_str(&format!("<h1>{}</h1>\n<hr>\n<ul>\n", title));
    for name in &entries {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            utf8_percent_encode(name, HREF_ENCODE_SET),
            html_escape(name)
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Ok(html)
}

pub fn render_error(status: u16, message: &str) -> String {
    format!(
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>Error response</title>\n</head>\n<body>\n<h1>Error response</h1>\n\
<p>Error code: {}</p>\n<p>Message: {}.</p>\n</body>\n</html>\n",
        status,
        html_escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_directory_sorted_with_dir_suffix() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.csv"), "x").unwrap();
        fs::write(temp_dir.path().join("A.js"), "x").unwrap();
        fs::write(temp_dir.path().join("my file.json"), "x").unwrap();
        fs::create_dir(temp_dir.path().join("data")).unwrap();

        let html = render_directory(temp_dir.path(), "/assets/").unwrap();

        assert!(html.contains("<title>Directory listing for /assets/</title>"));
        let a = html.find("A.js").unwrap();
        let b = html.find("b.csv").unwrap();
        let data = html.find("data/").unwrap();
        let my = html.find("my%20file.json").unwrap();
        assert!(a < b && b < data && data < my);
        assert!(html.contains("<a href=\"data/\">data/</a>"));
        assert!(html.contains(">my file.json</a>"));
    }

    #[test]
    fn test_render_error_mentions_status() {
        let html = render_error(404, "File not found");
        assert!(html.contains("Error code: 404"));
        assert!(html.contains("Message: File not found."));
    }
}
