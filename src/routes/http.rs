//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs include parameters and basic result info.

use std::sync::Arc;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, instrument, warn};

use crate::logic::{generate_problem, parse_reply};
use crate::protocol::*;
use crate::state::AppState;
use crate::topics::validate_selection;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_topics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(TopicsOut { topics: state.topics.clone() })
}

#[instrument(level = "info", skip(state, body), fields(topic_count = body.topics.len(), difficulty = ?body.difficulty, follow_up = body.is_another_problem))]
pub async fn http_post_problem(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GenerateIn>,
) -> impl IntoResponse {
  // Reject bad selections before anything leaves the process.
  if let Err(msg) = validate_selection(&state.topics, &body.topics) {
    warn!(target: "generate", %msg, "Rejected generation request");
    return (StatusCode::BAD_REQUEST, Json(ErrorOut { error: msg })).into_response();
  }

  let req = body.into_request();
  match generate_problem(&state, &req).await {
    Ok(text) => {
      info!(target: "generate", reply_len = text.len(), "HTTP problem served");
      Json(GenerateOut { response: text }).into_response()
    }
    Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorOut { error: e })).into_response(),
  }
}

#[instrument(level = "info", skip(body), fields(raw_len = body.raw.len()))]
pub async fn http_post_parse(Json(body): Json<ParseIn>) -> impl IntoResponse {
  let parsed = parse_reply(&body.raw);
  info!(target: "generate", name = %parsed.name, "HTTP parse served");
  Json(to_parse_out(parsed, body.program_language))
}
