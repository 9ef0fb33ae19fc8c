use serde::{Deserialize, Serialize};

fn default_window_size() -> usize {
    2
}

fn default_damping() -> f64 {
    0.85
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_max_iterations() -> usize {
    100
}

fn default_min_tokens() -> usize {
    6
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of following tokens paired with each target token
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Per-node convergence tolerance; iteration stops once the L1 change
    /// drops below `node_count * tolerance`
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Documents with fewer cleaned tokens are skipped
    #[serde(default = "default_min_tokens")]
    pub min_tokens: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            damping: default_damping(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            min_tokens: default_min_tokens(),
        }
    }
}
