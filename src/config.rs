//! Loading generator configuration (prompt templates + topic catalog) from TOML.
//!
//! See `GeneratorConfig` and `Prompts` for expected schema.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct GeneratorConfig {
  #[serde(default)]
  pub prompts: Prompts,
  /// Optional topic catalog override. When empty, the built-in catalog from
  /// `topics::default_topic_catalog` is used.
  #[serde(default)]
  pub topics: Vec<String>,
}

/// Prompt templates used when asking the model for a problem. `{difficulty}`
/// and `{topics}` are substituted verbatim. Defaults match the production
/// prompts; override them in TOML if you need to tune tone/structure.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
  pub problem_en: String,
  pub followup_en: String,
  pub problem_th: String,
  pub followup_th: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      problem_en: "Give me a {difficulty} level university Programming problem related to the following topics: {topics}. Provide problem descriptions, 3 example test cases, 3 example outputs, name of the problem, and example source code.".into(),
      followup_en: "Give me more new {difficulty} level university Programming problems related to the following topics: {topics}. Include detailed descriptions, 3 example test cases, example outputs, and source code.".into(),
      problem_th: "ขอโจทย์ Programming ระดับมหาลัย ระดับ {difficulty} ที่เกี่ยวข้องกับหัวข้อ {topics} อธิบายคำอธิบายของปัญหา ตัวอย่างTestcase 3 ชุด ผลลัพธ์ตัวอย่าง 3 ชุด ชื่อโจทย์ และตัวอย่างโค้ดโปรแกรม".into(),
      followup_th: "ขอโจทย์ใหม่เพิ่มเติม ระดับมหาลัย ระดับ {difficulty} ที่เกี่ยวข้องกับหัวข้อ {topics} พร้อมคำอธิบาย ตัวอย่าง Testcase 3 ชุด และโค้ดโปรแกรมตัวอย่าง".into(),
    }
  }
}

/// Attempt to load `GeneratorConfig` from GENERATOR_CONFIG_PATH.
/// On any parsing/IO error, returns None.
pub fn load_generator_config_from_env() -> Option<GeneratorConfig> {
  let path = std::env::var("GENERATOR_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<GeneratorConfig>(&s) {
      Ok(cfg) => {
        info!(target: "probgen_backend", %path, "Loaded generator config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "probgen_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "probgen_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_templates_carry_both_placeholders() {
    let p = Prompts::default();
    for tpl in [&p.problem_en, &p.followup_en, &p.problem_th, &p.followup_th] {
      assert!(tpl.contains("{difficulty}"), "missing difficulty in {}", tpl);
      assert!(tpl.contains("{topics}"), "missing topics in {}", tpl);
    }
  }

  #[test]
  fn toml_override_replaces_prompts_and_topics() {
    let cfg: GeneratorConfig = toml::from_str(
      r#"
      topics = ["Recursion", "Sorting"]

      [prompts]
      problem_en = "EN {difficulty} {topics}"
      followup_en = "EN more {difficulty} {topics}"
      problem_th = "TH {difficulty} {topics}"
      followup_th = "TH more {difficulty} {topics}"
      "#,
    )
    .unwrap();
    assert_eq!(cfg.topics, vec!["Recursion", "Sorting"]);
    assert_eq!(cfg.prompts.problem_en, "EN {difficulty} {topics}");
  }

  #[test]
  fn empty_toml_falls_back_to_defaults() {
    let cfg: GeneratorConfig = toml::from_str("").unwrap();
    assert!(cfg.topics.is_empty());
    assert_eq!(cfg.prompts.problem_en, Prompts::default().problem_en);
  }
}
