use axum::response::Json;
use serde::Serialize;

/// Health check response body
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// Always "OK" while the server is accepting requests
    #[cfg_attr(feature = "openapi", schema(example = "OK"))]
    pub status: &'static str,
}

/// Liveness check. Does not contact the transcription provider.
#[cfg_attr(
    feature = "openapi",
    utoipa::path(
        get,
        path = "/health",
        responses(
            (status = 200, description = "Server is running", body = HealthResponse)
        ),
        tag = "health"
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}
