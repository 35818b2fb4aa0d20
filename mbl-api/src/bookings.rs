use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use mbl_core::booking::unwrap_envelope;
use mbl_core::{local_timestamp_label, normalize, render_message, BookingSubmission};

use crate::error::AppError;
use crate::state::AppState;

const CONFIRMATION: &str = "Đã gửi yêu cầu đặt bay. Chúng tôi sẽ liên hệ sớm!";

pub fn routes() -> Router<AppState> {
    Router::new().route("/booking", post(create_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    // Body may be the submission itself or wrapped under `payload`; both are
    // accepted and unwrapped exactly once here.
    let value: Value = serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;
    let raw: BookingSubmission =
        serde_json::from_value(unwrap_envelope(value)).map_err(|_| AppError::InvalidJson)?;

    let booking = normalize(raw, &state.catalog, local_timestamp_label)?;

    let text = render_message(&booking);
    let results = state.notifier.broadcast(&text, true).await;

    if results.iter().any(|r| !r.ok) {
        return Err(AppError::DeliveryFailed {
            message: "Some Telegram messages failed".to_string(),
            details: results,
        });
    }

    info!(
        location = %booking.location,
        guests = booking.guests_count,
        "booking request forwarded to Telegram"
    );

    let recipients: Vec<Value> = results
        .iter()
        .map(|r| json!({ "recipient": r.recipient }))
        .collect();

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "ok": true,
            "message": CONFIRMATION,
            "telegram": recipients,
            "booking": booking,
        })),
    ))
}
