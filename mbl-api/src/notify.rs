use axum::{
    body::Bytes,
    extract::State,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct NotifyRequest {
    text: String,
    #[serde(default = "default_html")]
    html: bool,
}

fn default_html() -> bool {
    true
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/notify", post(send_notification))
}

/// Raw-text fan-out: forwards an arbitrary message to every configured
/// recipient without the booking pipeline.
async fn send_notification(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let req: NotifyRequest = serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;

    let results = state.notifier.broadcast(&req.text, req.html).await;

    if results.iter().any(|r| !r.ok) {
        return Err(AppError::DeliveryFailed {
            message: "Some Telegram messages failed".to_string(),
            details: results,
        });
    }

    Ok(Json(json!({ "ok": true, "results": results })))
}
