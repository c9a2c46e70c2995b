//! Built-in topic catalog and selection validation.

/// The closed set of course topics the form offers when no TOML override is
/// provided. Order matters: the frontend renders the list as-is.
pub fn default_topic_catalog() -> Vec<String> {
  [
    "Introduction",
    "Variables Expression Statement",
    "Conditional Execution",
    "While Loop",
    "Definite Loop",
    "List",
    "String",
    "Function",
    "Dictionary",
    "Files",
  ]
  .iter()
  .map(|s| s.to_string())
  .collect()
}

/// Check a submitted selection against the catalog before anything is sent
/// upstream. Empty selections and unknown names are rejected with a
/// user-facing message.
pub fn validate_selection(catalog: &[String], topics: &[String]) -> Result<(), String> {
  if topics.is_empty() {
    return Err("Please select at least one topic.".into());
  }
  for t in topics {
    if !catalog.iter().any(|c| c == t) {
      return Err(format!("Unknown topic: {}", t));
    }
  }
  Ok(())
}
