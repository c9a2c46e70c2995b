//! Splitting a model reply into a name/description/source triple by marker search.
//!
//! The reply format is a soft textual contract: we look for "Problem Name:",
//! "Description:" and "Example Source Code:" markers, case-insensitively.
//! When markers are missing or out of order we degrade to placeholders
//! instead of failing, so malformed model output can never take the view
//! down with it — only visibly degrade it.

use crate::domain::ParsedProblem;
use crate::util::{find_ignore_ascii_case, strip_code_fences};

const NAME_MARKER: &str = "problem name:";
const DESCRIPTION_MARKER: &str = "description:";
const SOURCE_MARKER: &str = "example source code:";

/// Shown when the reply has no recognizable name line.
pub const FALLBACK_NAME: &str = "Untitled Problem";
/// Shown when the reply has no recognizable source-code section.
pub const FALLBACK_SOURCE: &str = "# Write your solution here\nprint(\"Hello, world!\")";

/// Split a raw model reply into name, description, and source code.
/// Total over any input, including the empty string.
pub fn parse_problem(raw: &str) -> ParsedProblem {
  let name = raw
    .lines()
    .find_map(|line| {
      find_ignore_ascii_case(line, NAME_MARKER)
        .map(|at| line[at + NAME_MARKER.len()..].trim().to_string())
    })
    .filter(|n| !n.is_empty())
    .unwrap_or_else(|| FALLBACK_NAME.to_string());

  let desc_at = find_ignore_ascii_case(raw, DESCRIPTION_MARKER);
  let source_at = find_ignore_ascii_case(raw, SOURCE_MARKER);

  let (description, source_code) = match (desc_at, source_at) {
    // Both markers present, in order: slice strictly between/after them.
    (Some(d), Some(s)) if d + DESCRIPTION_MARKER.len() <= s => {
      let description = raw[d + DESCRIPTION_MARKER.len()..s].trim().to_string();
      let source = strip_code_fences(raw[s + SOURCE_MARKER.len()..].trim());
      (description, source)
    }
    // Missing or reversed markers: keep the whole reply readable and fall
    // back to a placeholder snippet.
    _ => (raw.to_string(), FALLBACK_SOURCE.to_string()),
  };

  ParsedProblem { name, description, source_code }
}
