use std::path::PathBuf;

use clap::Parser;
use kata_config::Config;

/// Rank the words of plain-text documents by co-occurrence centrality
#[derive(Parser, Debug)]
#[command(name = "kata", version, about)]
pub struct Cli {
    /// Plain-text documents to analyze
    #[arg(required_unless_present = "write_profile")]
    pub files: Vec<PathBuf>,

    /// Number of following tokens paired with each token
    #[arg(short, long)]
    pub window: Option<usize>,

    /// PageRank damping factor, strictly between 0 and 1
    #[arg(short, long)]
    pub damping: Option<f64>,

    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Ranking rows printed per document
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Directory for JSON graph exports
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// JSON profile to start from
    #[arg(short, long, env = "KATA_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Save the resolved configuration as a profile and exit
    #[arg(long)]
    pub write_profile: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Command-line flags take precedence over profile and environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(window) = self.window {
            config.analysis.window_size = window;
        }
        if let Some(damping) = self.damping {
            config.analysis.damping = damping;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.analysis.max_iterations = max_iterations;
        }
        if let Some(top) = self.top {
            config.output.top_n = top;
        }
        if let Some(export) = &self.export {
            config.output.export_dir = Some(export.clone());
        }
    }
}
