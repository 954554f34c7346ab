//! HTTP downloader tests against a local mock server.

use tunegrab::downloader::{Downloader, HttpDownloader};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn streams_body_to_destination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"audio bytes".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("a.mp3");

    HttpDownloader::new()
        .download(&format!("{}/a.mp3", server.uri()), &dest)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), b"audio bytes");
}

#[tokio::test]
async fn http_error_leaves_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.mp3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("missing.mp3");

    let result = HttpDownloader::new()
        .download(&format!("{}/missing.mp3", server.uri()), &dest)
        .await;

    assert!(result.is_err());
    assert!(!dest.exists());
}

#[tokio::test]
async fn connection_failure_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("never.mp3");

    // Port 1 is never listening.
    let result = HttpDownloader::new()
        .download("http://127.0.0.1:1/never.mp3", &dest)
        .await;

    assert!(result.is_err());
    assert!(!dest.exists());
}
