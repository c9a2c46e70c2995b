//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
/// The needle must be ASCII; the haystack may be any UTF-8 (Thai replies
/// included), and the returned offset is always a char boundary because
/// ASCII bytes never match inside a multi-byte sequence.
pub fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
  if needle.is_empty() {
    return Some(0);
  }
  let h = haystack.as_bytes();
  let n = needle.as_bytes();
  if n.len() > h.len() {
    return None;
  }
  (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// Strip fenced-code-block delimiters from a snippet.
/// Drops a leading ``` line (with or without a language tag) and a trailing
/// ``` line if present; everything else passes through untouched.
pub fn strip_code_fences(s: &str) -> String {
  let mut t = s.trim();
  if let Some(rest) = t.strip_prefix("```") {
    // The remainder of the fence line may carry a language tag; skip it all.
    t = match rest.find('\n') {
      Some(i) => &rest[i + 1..],
      None => "",
    };
  }
  let t = t.trim_end();
  let t = match t.strip_suffix("```") {
    Some(head) => head,
    None => t,
  };
  t.trim().to_string()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    return s.to_string();
  }
  let head: String = s.chars().take(max).collect();
  format!("{}… ({} bytes total)", head, s.len())
}
