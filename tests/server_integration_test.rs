use dataviz_tools::{FileHandler, FileServer, MimeRegistry};
use std::fs;
use tempfile::TempDir;

/// Starts a server on an ephemeral port in a background thread.
fn start_server(root: &std::path::Path) -> String {
    let handler = FileHandler::new(root.to_path_buf(), MimeRegistry::with_defaults());
    let server = FileServer::bind("127.0.0.1:0", handler).unwrap();
    let addr = server.local_addr().unwrap();
    std::thread::spawn(move || server.serve_forever());
    format!("http://{}", addr)
}

fn site() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("style.css"), "h1 { font-weight: bold; }").unwrap();
    fs::write(root.join("script.js"), "console.log('hi');").unwrap();
    fs::write(root.join("player.mjs"), "export const x = 1;").unwrap();
    fs::write(root.join("divisions.json"), "{}").unwrap();
    fs::write(root.join("index.html"), "<!doctype html>").unwrap();
    fs::create_dir(root.join("data")).unwrap();
    fs::write(root.join("data").join("teamdata.csv"), "team,wins\nBUF,13\n").unwrap();
    temp_dir
}

#[tokio::test]
async fn test_get_style_css_returns_text_css() {
    let dir = site();
    let base = start_server(dir.path());

    let response = reqwest::get(format!("{}/style.css", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/css"
    );
    assert_eq!(response.text().await.unwrap(), "h1 { font-weight: bold; }");
}

#[tokio::test]
async fn test_web_asset_content_types() {
    let dir = site();
    let base = start_server(dir.path());

    let cases = [
        ("/script.js", "application/javascript"),
        ("/player.mjs", "application/javascript"),
        ("/divisions.json", "application/json"),
        ("/data/teamdata.csv", "text/csv"),
    ];
    for (path, expected) in cases {
        let response = reqwest::get(format!("{}{}", base, path)).await.unwrap();
        assert_eq!(response.status(), 200, "{}", path);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            expected,
            "{}",
            path
        );
    }
}

#[tokio::test]
async fn test_missing_file_is_404_and_server_keeps_serving() {
    let dir = site();
    let base = start_server(dir.path());

    let missing = reqwest::get(format!("{}/does-not-exist.js", base))
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);

    let after = reqwest::get(format!("{}/style.css", base)).await.unwrap();
    assert_eq!(after.status(), 200);
}

#[tokio::test]
async fn test_root_serves_index_and_head_has_no_body() {
    let dir = site();
    let base = start_server(dir.path());

    let index = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(index.status(), 200);
    assert_eq!(index.text().await.unwrap(), "<!doctype html>");

    let client = reqwest::Client::new();
    let head = client
        .head(format!("{}/data/teamdata.csv", base))
        .send()
        .await
        .unwrap();
    assert_eq!(head.status(), 200);
    assert_eq!(head.headers()["content-type"].to_str().unwrap(), "text/csv");
    assert!(head.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_directory_without_slash_redirects() {
    let dir = site();
    let base = start_server(dir.path());

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let response = client.get(format!("{}/data", base)).send().await.unwrap();

    assert_eq!(response.status(), 301);
    assert_eq!(response.headers()["location"].to_str().unwrap(), "/data/");
}

#[tokio::test]
async fn test_traversal_cannot_escape_root() {
    let outer = TempDir::new().unwrap();
    fs::write(outer.path().join("secret.txt"), "top secret").unwrap();
    let root = outer.path().join("public");
    fs::create_dir(&root).unwrap();
    let base = start_server(&root);

    let response = reqwest::get(format!("{}/%2e%2e/secret.txt", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_drive_letter_targets_are_bad_requests() {
    let dir = site();
    let base = start_server(dir.path());

    for path in ["/C:/Windows/win.ini", "/c%3A/Windows/win.ini"] {
        let response = reqwest::get(format!("{}{}", base, path)).await.unwrap();
        assert_eq!(response.status(), 400, "{}", path);
    }

    let after = reqwest::get(format!("{}/style.css", base)).await.unwrap();
    assert_eq!(after.status(), 200);
}

#[test]
fn test_bind_failure_is_reported() {
    let dir = site();
    let handler = FileHandler::new(dir.path().to_path_buf(), MimeRegistry::with_defaults());
    let first = FileServer::bind("127.0.0.1:0", handler.clone()).unwrap();
    let addr = first.local_addr().unwrap();

    let err = FileServer::bind(&addr.to_string(), handler).err().unwrap();
    assert!(matches!(err, dataviz_tools::DatavizError::BindError { .. }));
}
