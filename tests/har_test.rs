//! HAR loading integration tests.

use netlog::capture::{BodyFetcher, CaptureStore, HarContentFetcher};
use netlog::curl::synthesize;
use netlog::export::export_log;
use netlog::har::log::{load_har_file, parse_har_entry, parse_har_log, save_har_file};
use netlog::har::ExchangeRecord;
use std::sync::Arc;

const ARCHIVE: &str = r#"{
  "log": {
    "version": "1.2",
    "creator": {"name": "Chrome", "version": "120"},
    "entries": [
      {
        "request": {
          "method": "POST",
          "url": "https://api.example.com/v1/login",
          "headers": [
            {"name": ":authority", "value": "api.example.com"},
            {"name": "content-type", "value": "application/json"},
            {"name": "content-length", "value": "17"},
            {"name": "cookie", "value": "sid=abc"}
          ],
          "postData": {"mimeType": "application/json", "text": "{\"user\":\"o'neil\"}"}
        },
        "response": {
          "status": 200,
          "bodySize": 15,
          "content": {"mimeType": "application/json", "text": "eyJvayI6dHJ1ZX0=", "encoding": "base64"}
        },
        "time": 120.7
      },
      {
        "request": {"method": "GET", "url": "https://cdn.example.com/app.js", "headers": []},
        "response": {"status": 304, "bodySize": -1, "content": {"mimeType": "text/javascript"}},
        "time": 3.2
      }
    ]
  }
}"#;

#[test]
fn test_entry_synthesizes_from_archive() {
    let entries = parse_har_log(ARCHIVE).unwrap();
    assert_eq!(
        synthesize(&entries[0]),
        "curl 'https://api.example.com/v1/login' \\\n  -H 'content-type: application/json' \\\n  -b 'sid=abc' \\\n  --data-raw '{\"user\":\"o'\\''neil\"}'"
    );
}

#[tokio::test]
async fn test_archive_export() {
    let mut store = CaptureStore::new();
    for record in parse_har_log(ARCHIVE).unwrap() {
        let fetcher = HarContentFetcher::new(&record.response.content);
        store.append(record, Arc::new(fetcher));
    }

    let document = export_log(&store, "api.example.com").await.unwrap();
    assert!(document.contains("Response :\n{\"ok\":true}"));
    assert!(!document.contains("app.js"));
}

#[tokio::test]
async fn test_archive_without_body_text() {
    let entries = parse_har_log(ARCHIVE).unwrap();
    let fetcher = HarContentFetcher::new(&entries[1].response.content);
    assert_eq!(fetcher.fetch().await, Ok(None));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.har");
    let records = vec![
        ExchangeRecord::new("GET", "https://a.test/1").with_status(200),
        ExchangeRecord::new("DELETE", "https://a.test/2").with_header("Authorization", "Bearer t"),
    ];

    save_har_file(&path, &records).unwrap();
    let loaded = load_har_file(&path).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_har_file(&dir.path().join("missing.har")).is_err());
}

#[test]
fn test_archive_with_null_fields_keeps_every_entry() {
    let archive = r#"{"log":{"entries":[
        {"request":{"method":"GET","url":"https://a.test/ok"},"response":{"status":200}},
        {"request":{"method":null,"url":"https://a.test/",
                    "headers":[{"name":"X","value":null}]},
         "response":{"status":null}}
    ]}}"#;
    let entries = parse_har_log(archive).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].url(), "https://a.test/ok");
    assert_eq!(synthesize(&entries[1]), "curl 'https://a.test/' \\\n  -H 'X: '");
}

#[test]
fn test_entry_with_null_header_value() {
    let record = parse_har_entry(
        r#"{"request":{"url":"https://a.test/","headers":[{"name":"X","value":null}]}}"#,
    )
    .unwrap();
    assert_eq!(record.request.headers[0].value, "");
}

