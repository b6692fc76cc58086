use axum::response::Html;

const RECORDER_PAGE: &str = include_str!("../../assets/recorder.html");

/// Browser recorder that posts clips to `/api/transcribe`.
#[cfg_attr(
    feature = "openapi",
    utoipa::path(
        get,
        path = "/",
        responses(
            (status = 200, description = "Recorder page", content_type = "text/html", body = String)
        ),
        tag = "recorder"
    )
)]
pub async fn recorder_page() -> Html<&'static str> {
    Html(RECORDER_PAGE)
}
