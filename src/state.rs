//! Application state: prompt templates, topic catalog, and the OpenAI client.
//!
//! This module owns:
//!   - the prompts struct (from TOML or defaults)
//!   - the closed topic catalog the form offers
//!   - the optional OpenAI client
//!
//! Everything here is read-only after startup, so handlers share it through
//! a plain `Arc` without locking. Generated problems are never stored on the
//! server; "saved" state lives in the client only.

use tracing::{info, instrument};

use crate::config::{load_generator_config_from_env, Prompts};
use crate::openai::OpenAI;
use crate::topics::default_topic_catalog;

#[derive(Clone)]
pub struct AppState {
    pub prompts: Prompts,
    pub topics: Vec<String>,
    pub openai: Option<OpenAI>,
}

impl AppState {
    /// Build state from env: load config, resolve the topic catalog, init OpenAI.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        // Load TOML config if provided (prompt templates + optional catalog).
        let cfg_opt = load_generator_config_from_env();
        let prompts = cfg_opt
            .as_ref()
            .map(|c| c.prompts.clone())
            .unwrap_or_default();

        let topics = match cfg_opt.as_ref().filter(|c| !c.topics.is_empty()) {
            Some(cfg) => cfg.topics.clone(),
            None => default_topic_catalog(),
        };
        info!(target: "generate", count = topics.len(), "Topic catalog loaded");

        // Build optional OpenAI client (if API key present).
        let openai = OpenAI::from_env();
        if let Some(oa) = &openai {
            info!(target: "probgen_backend", base_url = %oa.base_url, model = %oa.model, "OpenAI enabled.");
        } else {
            info!(target: "probgen_backend", "OpenAI disabled (no OPENAI_API_KEY). Generation requests will fail.");
        }

        Self { prompts, topics, openai }
    }

    /// State with built-in defaults and an explicit client. Used by tests to
    /// avoid touching process env.
    pub fn with_openai(openai: Option<OpenAI>) -> Self {
        Self {
            prompts: Prompts::default(),
            topics: default_topic_catalog(),
            openai,
        }
    }
}
