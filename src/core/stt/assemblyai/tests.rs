//! Tests for the AssemblyAI batch client.
//!
//! - Configuration handling
//! - Upload requests and failure surfacing
//! - Transcript job creation, polling and failure surfacing

use super::*;
use crate::core::stt::base::{AudioPayload, FailureKind, STTError, TranscriptionProvider, UploadReference};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_bytes, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> AssemblyAIConfig {
    AssemblyAIConfig {
        base_url: Some(server.uri()),
        poll_interval: Duration::from_millis(5),
        ..AssemblyAIConfig::new("test-key")
    }
}

fn test_client(server: &MockServer) -> AssemblyAIClient {
    AssemblyAIClient::new(test_config(server)).unwrap()
}

// =============================================================================
// Configuration Tests
// =============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn test_region_urls() {
        for region in [AssemblyAIRegion::Default, AssemblyAIRegion::Eu] {
            let url = region.rest_base_url();
            assert!(url.starts_with("https://"));
            assert!(url.contains("assemblyai.com"));
        }
    }

    #[test]
    fn test_region_parsing() {
        assert_eq!("eu".parse::<AssemblyAIRegion>().unwrap(), AssemblyAIRegion::Eu);
        assert_eq!("EU".parse::<AssemblyAIRegion>().unwrap(), AssemblyAIRegion::Eu);
        assert_eq!(
            "default".parse::<AssemblyAIRegion>().unwrap(),
            AssemblyAIRegion::Default
        );
        assert!("mars".parse::<AssemblyAIRegion>().is_err());
    }

    #[test]
    fn test_endpoint_urls_follow_region() {
        let config = AssemblyAIConfig {
            region: AssemblyAIRegion::Eu,
            ..AssemblyAIConfig::new("key")
        };
        assert_eq!(config.upload_url(), "https://api.eu.assemblyai.com/v2/upload");
        assert_eq!(
            config.transcript_url(),
            "https://api.eu.assemblyai.com/v2/transcript"
        );
        assert_eq!(
            config.transcript_status_url("tx-1"),
            "https://api.eu.assemblyai.com/v2/transcript/tx-1"
        );
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let config = AssemblyAIConfig {
            base_url: Some("http://localhost:9000/".to_string()),
            ..AssemblyAIConfig::new("key")
        };
        assert_eq!(config.upload_url(), "http://localhost:9000/v2/upload");
    }

    #[test]
    fn test_validate_rejects_blank_api_key() {
        let config = AssemblyAIConfig::new("   ");
        let err = config.validate().unwrap_err();
        assert!(err.contains("API key"));
        assert!(AssemblyAIClient::new(config).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = AssemblyAIConfig {
            base_url: Some("ftp://example.com".to_string()),
            ..AssemblyAIConfig::new("key")
        };
        assert!(config.validate().is_err());

        let config = AssemblyAIConfig {
            base_url: Some("not a url".to_string()),
            ..AssemblyAIConfig::new("key")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_poll_interval() {
        let config = AssemblyAIConfig {
            poll_interval: Duration::ZERO,
            ..AssemblyAIConfig::new("key")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AssemblyAIConfig::new("super-secret-key");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
    }
}

// =============================================================================
// Upload Tests
// =============================================================================

mod upload_tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_sends_raw_bytes_with_credential() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/upload"))
            .and(header("authorization", "test-key"))
            .and(header("content-type", "application/octet-stream"))
            .and(body_bytes(b"fake-audio".to_vec()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "upload_url": "https://cdn.assemblyai.com/upload/ref-123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let reference = client
            .upload(AudioPayload::from(b"fake-audio".to_vec()))
            .await
            .expect("upload should succeed");

        assert_eq!(reference.as_str(), "https://cdn.assemblyai.com/upload/ref-123");
    }

    #[tokio::test]
    async fn test_upload_rejection_surfaces_raw_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/upload"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Upload body is empty"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .upload(AudioPayload::from(Vec::<u8>::new()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Upload failed: Upload body is empty");
        assert_eq!(err.kind(), FailureKind::Status(400));
    }

    #[tokio::test]
    async fn test_upload_rejection_without_body_uses_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/upload"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .upload(AudioPayload::from(vec![0u8; 16]))
            .await
            .unwrap_err();

        assert!(matches!(err, STTError::Upload { .. }));
        assert!(err.to_string().contains("503"));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_upload_malformed_response_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .upload(AudioPayload::from(vec![0u8; 16]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Decode);
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_upload_unreachable_provider_is_transport_error() {
        let config = AssemblyAIConfig {
            base_url: Some("http://127.0.0.1:1".to_string()),
            ..AssemblyAIConfig::new("test-key")
        };
        let client = AssemblyAIClient::new(config).unwrap();

        let err = client
            .upload(AudioPayload::from(vec![0u8; 16]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Transport);
        assert!(err.to_string().starts_with("Upload failed: "));
    }
}

// =============================================================================
// Transcribe Tests
// =============================================================================

mod transcribe_tests {
    use super::*;

    const AUDIO_URL: &str = "https://cdn.assemblyai.com/upload/ref-123";

    #[tokio::test]
    async fn test_transcribe_polls_until_completed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/transcript"))
            .and(header("authorization", "test-key"))
            .and(body_json(json!({ "audio_url": AUDIO_URL })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "tx-1",
                "status": "queued",
                "text": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v2/transcript/tx-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "tx-1",
                "status": "processing",
                "text": null
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v2/transcript/tx-1"))
            .and(header("authorization", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "tx-1",
                "status": "completed",
                "text": "hello world"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let text = client
            .transcribe(UploadReference::new(AUDIO_URL))
            .await
            .expect("transcription should succeed");

        assert_eq!(text, "hello world");
    }

    #[tokio::test]
    async fn test_transcribe_sends_configured_options() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/transcript"))
            .and(body_json(json!({
                "audio_url": AUDIO_URL,
                "speech_model": "universal",
                "language_code": "en_us"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "tx-9",
                "status": "completed",
                "text": "configured"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = AssemblyAIConfig {
            speech_model: Some("universal".to_string()),
            language_code: Some("en_us".to_string()),
            ..test_config(&server)
        };
        let client = AssemblyAIClient::new(config).unwrap();

        let text = client
            .transcribe(UploadReference::new(AUDIO_URL))
            .await
            .unwrap();
        assert_eq!(text, "configured");
    }

    #[tokio::test]
    async fn test_transcribe_silence_yields_empty_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/transcript"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "tx-2",
                "status": "completed",
                "text": null
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let text = client
            .transcribe(UploadReference::new(AUDIO_URL))
            .await
            .unwrap();

        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_transcribe_job_failure_surfaces_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/transcript"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "tx-3",
                "status": "queued"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v2/transcript/tx-3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "tx-3",
                "status": "error",
                "error": "Transcoding failed. Audio file is corrupted."
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .transcribe(UploadReference::new(AUDIO_URL))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Transcoding failed. Audio file is corrupted.");
        assert_eq!(err.kind(), FailureKind::JobFailed);
        assert!(matches!(err, STTError::Transcribe { .. }));
    }

    #[tokio::test]
    async fn test_transcribe_rejected_request_uses_error_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/transcript"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid API key" })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .transcribe(UploadReference::new(AUDIO_URL))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid API key");
        assert_eq!(err.kind(), FailureKind::Status(401));
    }

    #[tokio::test]
    async fn test_transcribe_poll_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/transcript"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "tx-4",
                "status": "queued"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v2/transcript/tx-4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "tx-4",
                "status": "processing"
            })))
            .mount(&server)
            .await;

        let config = AssemblyAIConfig {
            poll_timeout: Some(Duration::from_millis(60)),
            ..test_config(&server)
        };
        let client = AssemblyAIClient::new(config).unwrap();

        let err = client
            .transcribe(UploadReference::new(AUDIO_URL))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Timeout);
        assert!(err.to_string().contains("tx-4"));
    }
}
