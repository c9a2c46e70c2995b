//! Prompt construction: four fixed templates (problem language × first/follow-up)
//! with the difficulty label and the comma-joined topic list substituted in.

use crate::config::Prompts;
use crate::domain::{ProblemLanguage, ProblemRequest};
use crate::util::fill_template;

/// Build the single user prompt for a generation request.
///
/// Template selection is by (problem_language, follow_up); difficulty and
/// topics are interpolated verbatim, no escaping or truncation. A non-empty
/// topic list is a caller invariant (empty selections are rejected upstream
/// as a validation error, never here).
pub fn build_prompt(prompts: &Prompts, req: &ProblemRequest) -> String {
  let template = match (req.problem_language, req.follow_up) {
    (ProblemLanguage::En, false) => &prompts.problem_en,
    (ProblemLanguage::En, true) => &prompts.followup_en,
    (ProblemLanguage::Th, false) => &prompts.problem_th,
    (ProblemLanguage::Th, true) => &prompts.followup_th,
  };
  let topics = req.topics.join(", ");
  fill_template(template, &[("difficulty", req.difficulty.label()), ("topics", &topics)])
}
