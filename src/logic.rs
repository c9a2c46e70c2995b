//! Core behaviors shared by the HTTP handlers.
//!
//! This includes:
//!   - Building the prompt and calling the model for a generation request
//!   - Hand-parsing a raw reply into the problem triple
//!
//! Topic validation happens in the handlers before anything gets here, so a
//! request reaching `generate_problem` already carries a non-empty, known
//! selection.

use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::domain::{ParsedProblem, ProblemRequest};
use crate::parse::parse_problem;
use crate::prompt::build_prompt;
use crate::state::AppState;
use crate::util::trunc_for_log;

/// User-facing message when the provider call (or its setup) fails.
pub const GENERATION_FAILED_TEXT: &str = "Failed to generate problem.";

/// Build the prompt and ask the model. Returns the reply text verbatim, or a
/// generic user-facing error. Provider failures are logged in detail here and
/// deliberately not distinguished for the client.
#[instrument(level = "info", skip(state, req), fields(difficulty = %req.difficulty.label(), topic_count = req.topics.len(), follow_up = req.follow_up))]
pub async fn generate_problem(state: &AppState, req: &ProblemRequest) -> Result<String, String> {
  let request_id = Uuid::new_v4();
  let prompt = build_prompt(&state.prompts, req);
  debug!(target: "generate", %request_id, prompt_len = prompt.len(), "Prompt built");

  if let Some(oa) = &state.openai {
    match oa.generate_problem(&prompt).await {
      Ok(text) => {
        info!(target: "generate", %request_id, reply_preview = %trunc_for_log(&text, 80), "Problem generated");
        Ok(text)
      }
      Err(e) => {
        error!(target: "generate", %request_id, error = %e, "OpenAI generation failed");
        Err(GENERATION_FAILED_TEXT.into())
      }
    }
  } else {
    error!(target: "generate", %request_id, "OPENAI_API_KEY not set; cannot generate");
    Err(GENERATION_FAILED_TEXT.into())
  }
}

/// Hand-parse a raw reply into the triple. Total; malformed text degrades to
/// placeholders rather than erroring.
#[instrument(level = "info", skip(raw), fields(raw_len = raw.len()))]
pub fn parse_reply(raw: &str) -> ParsedProblem {
  let parsed = parse_problem(raw);
  debug!(target: "generate", name = %parsed.name, source_len = parsed.source_code.len(), "Reply parsed");
  parsed
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Difficulty, ProblemLanguage, ProgramLanguage};

  #[tokio::test]
  async fn missing_client_yields_generic_failure() {
    let state = AppState::with_openai(None);
    let req = ProblemRequest {
      problem_language: ProblemLanguage::En,
      program_language: ProgramLanguage::C,
      difficulty: Difficulty::Easy,
      topics: vec!["List".into()],
      follow_up: false,
    };
    let err = generate_problem(&state, &req).await.unwrap_err();
    assert_eq!(err, GENERATION_FAILED_TEXT);
  }
}
