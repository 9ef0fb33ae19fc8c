use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::analysis::AnalysisConfig;
use self::output::OutputConfig;
use self::text::TextConfig;

pub mod analysis;
pub mod output;
pub mod text;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub text: TextConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparsable values are
    /// logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = parse_var(&lookup, "KATA_WINDOW_SIZE") {
            self.analysis.window_size = v;
        }
        if let Some(v) = parse_var(&lookup, "KATA_DAMPING") {
            self.analysis.damping = v;
        }
        if let Some(v) = parse_var(&lookup, "KATA_TOLERANCE") {
            self.analysis.tolerance = v;
        }
        if let Some(v) = parse_var(&lookup, "KATA_MAX_ITERATIONS") {
            self.analysis.max_iterations = v;
        }
        if let Some(v) = parse_var(&lookup, "KATA_MIN_TOKENS") {
            self.analysis.min_tokens = v;
        }
        if let Some(v) = parse_var(&lookup, "KATA_TOP_N") {
            self.output.top_n = v;
        }
        if let Some(dir) = lookup("KATA_EXPORT_DIR").filter(|d| !d.is_empty()) {
            self.output.export_dir = Some(PathBuf::from(dir));
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let analysis = &self.analysis;

        if analysis.window_size < 1 {
            return Err(ConfigError::Invalid {
                field: "analysis.window_size",
                reason: format!("must be at least 1, got {}", analysis.window_size),
            });
        }
        if !(analysis.damping > 0.0 && analysis.damping < 1.0) {
            return Err(ConfigError::Invalid {
                field: "analysis.damping",
                reason: format!("must lie strictly between 0 and 1, got {}", analysis.damping),
            });
        }
        if !(analysis.tolerance.is_finite() && analysis.tolerance > 0.0) {
            return Err(ConfigError::Invalid {
                field: "analysis.tolerance",
                reason: format!("must be positive, got {}", analysis.tolerance),
            });
        }
        if analysis.max_iterations < 1 {
            return Err(ConfigError::Invalid {
                field: "analysis.max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
