use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use httpmock::prelude::*;
use promo_etl::core::pipeline::{ContentPipeline, PipelineSettings};
use promo_etl::domain::model::{ObjectEvent, RunOutcome};
use promo_etl::{GeminiClient, HttpRecordSink, LocalObjectStore};
use tempfile::TempDir;

fn gemini(server: &MockServer) -> GeminiClient {
    GeminiClient::new(
        server.base_url(),
        "test-key".to_string(),
        "text-model".to_string(),
        "image-model".to_string(),
    )
}

fn settings() -> PipelineSettings {
    PipelineSettings {
        image_container: "images".to_string(),
        failed_container: Some("failed".to_string()),
    }
}

fn event() -> ObjectEvent {
    ObjectEvent {
        container_id: "input".to_string(),
        object_id: "products.csv".to_string(),
    }
}

#[tokio::test]
async fn test_end_to_end_csv_to_sink() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalObjectStore::new(temp_dir.path().to_path_buf());
    store
        .write_direct(
            "input",
            "products.csv",
            b"product_name,keywords\nWidget,\"blue, small\"\nSolar Lamp,garden\n",
        )
        .unwrap();

    let server = MockServer::start();
    let text_mock = server.mock(|when, then| {
        when.method(POST).path("/models/text-model:generateContent");
        then.status(200).json_body(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "Widgets are great!"}]}}
            ]
        }));
    });
    let image_mock = server.mock(|when, then| {
        when.method(POST).path("/models/image-model:generateContent");
        then.status(200).json_body(serde_json::json!({
            "candidates": [{
                "content": {"parts": [
                    {"inlineData": {"mimeType": "image/png", "data": BASE64.encode(b"\x89PNG fake")}}
                ]}
            }]
        }));
    });
    let sink_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/insertAll")
            .body_contains("\"product_name\":\"Widget\"")
            .body_contains("\"product_name\":\"Solar Lamp\"");
        then.status(200).json_body(serde_json::json!({}));
    });

    let pipeline = ContentPipeline::new(
        store,
        gemini(&server),
        gemini(&server),
        HttpRecordSink::new(server.url("/insertAll"), "test-key".to_string()),
        settings(),
    );

    let report = pipeline.run(&event()).await;

    assert_eq!(report.outcome, RunOutcome::Committed);
    assert_eq!(report.records_processed, 2);
    text_mock.assert_hits(2);
    image_mock.assert_hits(2);
    sink_mock.assert();

    // Both images landed in the public container under slugged names.
    let images: Vec<String> = std::fs::read_dir(temp_dir.path().join("images"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(images.len(), 2);
    assert!(images.iter().any(|n| n.starts_with("widget_") && n.ends_with(".png")));
    assert!(images
        .iter()
        .any(|n| n.starts_with("solar_lamp_") && n.ends_with(".png")));
}

#[tokio::test]
async fn test_blocked_text_row_degrades_without_image_call() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalObjectStore::new(temp_dir.path().to_path_buf());
    store
        .write_direct("input", "products.csv", b"name,keywords\nWidget,blue\n")
        .unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/models/text-model:generateContent");
        // Safety filter engaged: no candidates at all.
        then.status(200).json_body(serde_json::json!({}));
    });
    let image_mock = server.mock(|when, then| {
        when.method(POST).path("/models/image-model:generateContent");
        then.status(200).json_body(serde_json::json!({}));
    });
    let sink_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/insertAll")
            .body_contains("Content blocked by safety filter")
            .body_contains("Skipped: Text generation failed.");
        then.status(200).json_body(serde_json::json!({}));
    });

    let pipeline = ContentPipeline::new(
        store,
        gemini(&server),
        gemini(&server),
        HttpRecordSink::new(server.url("/insertAll"), "test-key".to_string()),
        settings(),
    );

    let report = pipeline.run(&event()).await;

    assert_eq!(report.outcome, RunOutcome::Committed);
    assert_eq!(report.records_processed, 1);
    image_mock.assert_hits(0);
    sink_mock.assert();
}

#[tokio::test]
async fn test_image_error_after_text_success_keeps_text() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalObjectStore::new(temp_dir.path().to_path_buf());
    store
        .write_direct("input", "products.csv", b"name,keywords\nWidget,blue\n")
        .unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/models/text-model:generateContent");
        then.status(200).json_body(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "Widgets are great!"}]}}
            ]
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/models/image-model:generateContent");
        then.status(500);
    });
    let sink_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/insertAll")
            .body_contains("Widgets are great!")
            .body_contains("Error: Image generation failed.");
        then.status(200).json_body(serde_json::json!({}));
    });

    let pipeline = ContentPipeline::new(
        store,
        gemini(&server),
        gemini(&server),
        HttpRecordSink::new(server.url("/insertAll"), "test-key".to_string()),
        settings(),
    );

    let report = pipeline.run(&event()).await;

    assert_eq!(report.outcome, RunOutcome::Committed);
    sink_mock.assert();
}

#[tokio::test]
async fn test_empty_file_goes_to_quarantine() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalObjectStore::new(temp_dir.path().to_path_buf());
    store.write_direct("input", "products.csv", b"").unwrap();

    let server = MockServer::start();
    let sink_mock = server.mock(|when, then| {
        when.method(POST).path("/insertAll");
        then.status(200).json_body(serde_json::json!({}));
    });

    let pipeline = ContentPipeline::new(
        store,
        gemini(&server),
        gemini(&server),
        HttpRecordSink::new(server.url("/insertAll"), "test-key".to_string()),
        settings(),
    );

    let report = pipeline.run(&event()).await;

    assert_eq!(report.outcome, RunOutcome::Quarantined);
    assert_eq!(report.records_processed, 0);
    sink_mock.assert_hits(0);
    assert!(!temp_dir.path().join("input/products.csv").exists());
    assert!(temp_dir.path().join("failed/products.csv").exists());
}

#[tokio::test]
async fn test_sink_rejection_does_not_quarantine() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalObjectStore::new(temp_dir.path().to_path_buf());
    store
        .write_direct("input", "products.csv", b"name,keywords\nWidget,blue\n")
        .unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/models/text-model:generateContent");
        then.status(200).json_body(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "Widgets are great!"}]}}
            ]
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/models/image-model:generateContent");
        then.status(200).json_body(serde_json::json!({}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/insertAll");
        then.status(503);
    });

    let pipeline = ContentPipeline::new(
        store,
        gemini(&server),
        gemini(&server),
        HttpRecordSink::new(server.url("/insertAll"), "test-key".to_string()),
        settings(),
    );

    let report = pipeline.run(&event()).await;

    // Insert failed, but the file was consumed; no quarantine.
    assert_eq!(report.outcome, RunOutcome::Committed);
    assert_eq!(report.records_processed, 1);
    assert!(temp_dir.path().join("input/products.csv").exists());
}
