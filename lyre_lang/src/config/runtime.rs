// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

/// Pipeline logging preferences, overridable through the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelinePreferences {
    /// Whether to log a summary line after each pipeline stage.
    pub log_stage_summaries: bool,

    /// Whether to log every token produced by the scanner.
    pub trace_tokens: bool,
}

impl Default for PipelinePreferences {
    fn default() -> Self {
        Self {
            log_stage_summaries: env::var("LYRE_LOG_STAGE_SUMMARIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            trace_tokens: env::var("LYRE_TRACE_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}
