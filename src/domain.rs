//! Domain models used by the backend: request enums, the problem request, and the parsed triple.

use serde::{Deserialize, Serialize};

/// Natural language the problem statement should be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemLanguage {
  En,
  Th,
}
impl Default for ProblemLanguage {
  fn default() -> Self { ProblemLanguage::En }
}

/// Language the example source code is expected in. Carried through for the
/// client-side editor highlighter; the prompt templates never mention it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramLanguage {
  C,
  Python,
}
impl ProgramLanguage {
  /// Highlighter identifier understood by the frontend editor.
  pub fn as_str(&self) -> &'static str {
    match self {
      ProgramLanguage::C => "c",
      ProgramLanguage::Python => "python",
    }
  }
}
impl Default for ProgramLanguage {
  fn default() -> Self { ProgramLanguage::Python }
}

/// Requested difficulty. The lowercase label is what gets templated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}
impl Difficulty {
  pub fn label(&self) -> &'static str {
    match self {
      Difficulty::Easy => "easy",
      Difficulty::Medium => "medium",
      Difficulty::Hard => "hard",
    }
  }
}

/// One generation request. Built fresh per submission, immutable, and
/// discarded once the prompt string has been derived from it.
#[derive(Clone, Debug)]
pub struct ProblemRequest {
  pub problem_language: ProblemLanguage,
  pub program_language: ProgramLanguage,
  pub difficulty: Difficulty,
  pub topics: Vec<String>,
  pub follow_up: bool,
}

/// Name/description/source triple hand-parsed out of a model reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedProblem {
  pub name: String,
  pub description: String,
  pub source_code: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wire_names_are_lowercase() {
    assert_eq!(serde_json::to_string(&ProblemLanguage::Th).unwrap(), "\"th\"");
    assert_eq!(serde_json::to_string(&ProgramLanguage::Python).unwrap(), "\"python\"");
    assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
  }

  #[test]
  fn difficulty_label_matches_wire_name() {
    for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
      assert_eq!(serde_json::to_string(&d).unwrap(), format!("\"{}\"", d.label()));
    }
  }
}
