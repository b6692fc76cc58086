//! OpenAPI description of the HTTP surface.
//!
//! Emitted by `transcribe-relay openapi [-f yaml|json] [-o FILE]`.

use utoipa::OpenApi;

use crate::handlers::{api, recorder, transcribe};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Transcribe Relay API",
        description = "Relays recorded audio clips to AssemblyAI and returns their transcripts.",
        license(name = "Apache-2.0")
    ),
    paths(
        api::health_check,
        recorder::recorder_page,
        transcribe::transcribe_handler,
    ),
    components(schemas(
        api::HealthResponse,
        transcribe::TranscribeResponse,
        transcribe::TranscribeErrorResponse,
    )),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "recorder", description = "In-browser recorder page"),
        (name = "transcription", description = "Audio transcription relay")
    )
)]
pub struct ApiDoc;

/// OpenAPI document rendered as YAML.
pub fn spec_yaml() -> Result<String, String> {
    ApiDoc::openapi().to_yaml().map_err(|e| e.to_string())
}

/// OpenAPI document rendered as pretty-printed JSON.
pub fn spec_json() -> Result<String, String> {
    ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|e| e.to_string())
}
