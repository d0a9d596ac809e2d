//! Ingest handler: one request, one row.

use crate::{app::AppState, db::insert_log, models::log::log_entry::LogEntry};
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use tracing::{error, info};

/// Decode a `LogEntry` from the raw body and append it to the store.
///
/// The body is parsed by hand rather than through `Json` so that every
/// decode failure, missing content type included, answers 400.
pub async fn ingest_log(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
  let entry = match LogEntry::from_json(&body) {
    Ok(entry) => entry,
    Err(e) => {
      error!("json decode failed: {e}");
      return (StatusCode::BAD_REQUEST, "Invalid JSON");
    }
  };

  let id = match insert_log(&state.db, &entry).await {
    Ok(id) => id,
    Err(e) => {
      error!("db error: {e}");
      return (StatusCode::INTERNAL_SERVER_ERROR, "Database error");
    }
  };

  info!(
    id,
    user = %entry.user_id,
    target = %entry.target_letter,
    predicted = %entry.predicted_letter,
    correct = entry.correct,
    "logged attempt"
  );

  (StatusCode::OK, "OK")
}
