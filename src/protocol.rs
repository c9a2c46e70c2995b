//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, ParsedProblem, ProblemLanguage, ProblemRequest, ProgramLanguage};

/// Body of POST /api/v1/problem. Field names match what the form submits.
#[derive(Debug, Deserialize)]
pub struct GenerateIn {
    #[serde(default)]
    pub language: ProblemLanguage,
    #[serde(rename = "programLanguage", default)]
    pub program_language: ProgramLanguage,
    pub difficulty: Difficulty,
    pub topics: Vec<String>,
    #[serde(rename = "isAnotherProblem", default)]
    pub is_another_problem: bool,
}

impl GenerateIn {
    /// Build the immutable per-submission request.
    pub fn into_request(self) -> ProblemRequest {
        ProblemRequest {
            problem_language: self.language,
            program_language: self.program_language,
            difficulty: self.difficulty,
            topics: self.topics,
            follow_up: self.is_another_problem,
        }
    }
}

#[derive(Serialize)]
pub struct GenerateOut {
    pub response: String,
}

/// Body of POST /api/v1/problem/parse — the hand-parse view.
#[derive(Debug, Deserialize)]
pub struct ParseIn {
    pub raw: String,
    #[serde(rename = "programLanguage", default)]
    pub program_language: ProgramLanguage,
}

/// Parsed triple plus the highlighter language for the editor view.
#[derive(Serialize)]
pub struct ParseOut {
    pub name: String,
    pub description: String,
    #[serde(rename = "sourceCode")]
    pub source_code: String,
    pub language: String,
}

/// Convert the internal triple to the public DTO.
pub fn to_parse_out(p: ParsedProblem, lang: ProgramLanguage) -> ParseOut {
    ParseOut {
        name: p.name,
        description: p.description,
        source_code: p.source_code,
        language: lang.as_str().to_string(),
    }
}

#[derive(Serialize)]
pub struct TopicsOut {
    pub topics: Vec<String>,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
