//! Indexer behaviour against a mock Generative Language endpoint.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xl_indexer::{
    tracks_from_indexed, GeminiIndexer, IndexedTrack, IndexerConfig, TrackIndexer, ERROR_FETCHING,
};

const MODEL_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn indexer(server: &MockServer) -> GeminiIndexer {
    let config = IndexerConfig {
        api_key: Some("test-key".to_string()),
        endpoint: server.uri(),
        timeout_secs: 5,
        ..IndexerConfig::default()
    };
    GeminiIndexer::new(&config).unwrap()
}

fn titles(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn generate_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
}

// =============================================================================
// Successful indexing
// =============================================================================

mod success {
    use super::*;

    #[tokio::test]
    async fn test_parses_track_list() {
        let server = MockServer::start().await;
        let text = r#"
            [{"trackTitle":"Flint Town Hustle","youtubeUrl":"https://youtu.be/a","spotifyUrl":"","appleMusicUrl":""},
             {"trackTitle":"Slay Ride","spotifyUrl":"https://open.spotify.com/track/b"}]
        "#;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(generate_response(text)))
            .expect(1)
            .mount(&server)
            .await;

        let records = indexer(&server)
            .index_tracks(&titles(&["Flint Town Hustle", "Slay Ride"]), "XL Beats")
            .await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].youtube_url.as_deref(), Some("https://youtu.be/a"));
        assert_eq!(records[1].track_title, "Slay Ride");
        assert!(records[1].youtube_url.is_none());
    }

    #[tokio::test]
    async fn test_records_import_as_singles() {
        let server = MockServer::start().await;
        let text = r#"[{"trackTitle":"Buick City Blues","youtubeUrl":"https://youtu.be/z","spotifyUrl":"","appleMusicUrl":"https://music.apple.com/z"}]"#;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(generate_response(text)))
            .mount(&server)
            .await;

        let records = indexer(&server)
            .index_tracks(&titles(&["Buick City Blues"]), "XL Beats")
            .await;
        let tracks = tracks_from_indexed(&records);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].sources.len(), 2);
        assert!(tracks[0].active_source().unwrap().is_embeddable);
    }

    #[tokio::test]
    async fn test_empty_titles_skip_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let records = indexer(&server).index_tracks(&[], "XL Beats").await;
        assert!(records.is_empty());
    }
}

// =============================================================================
// Failure fallbacks
// =============================================================================

mod fallback {
    use super::*;

    fn assert_all_failed(records: &[IndexedTrack], expected: &[&str]) {
        assert_eq!(records.len(), expected.len());
        for (record, title) in records.iter().zip(expected) {
            assert_eq!(record.track_title, *title);
            assert_eq!(record.youtube_url.as_deref(), Some(ERROR_FETCHING));
            assert_eq!(record.spotify_url.as_deref(), Some(ERROR_FETCHING));
            assert_eq!(record.apple_music_url.as_deref(), Some(ERROR_FETCHING));
        }
    }

    #[tokio::test]
    async fn test_server_error_returns_placeholders() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let records = indexer(&server)
            .index_tracks(&titles(&["One", "Two"]), "XL Beats")
            .await;
        assert_all_failed(&records, &["One", "Two"]);
        assert!(tracks_from_indexed(&records)
            .iter()
            .all(|t| t.sources.is_empty()));
    }

    #[tokio::test]
    async fn test_malformed_model_text_returns_placeholders() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(generate_response("Sorry, I can't help")),
            )
            .mount(&server)
            .await;

        let records = indexer(&server)
            .index_tracks(&titles(&["One"]), "XL Beats")
            .await;
        assert_all_failed(&records, &["One"]);
    }

    #[tokio::test]
    async fn test_missing_candidates_returns_placeholders() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let records = indexer(&server)
            .index_tracks(&titles(&["One"]), "XL Beats")
            .await;
        assert_all_failed(&records, &["One"]);
    }

    #[tokio::test]
    async fn test_unreachable_server_returns_placeholders() {
        let config = IndexerConfig {
            api_key: Some("test-key".to_string()),
            endpoint: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..IndexerConfig::default()
        };
        let indexer = GeminiIndexer::new(&config).unwrap();

        let records = indexer.index_tracks(&titles(&["One"]), "XL Beats").await;
        assert_all_failed(&records, &["One"]);
    }
}
