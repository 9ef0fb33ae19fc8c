use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_top_n() -> usize {
    20
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Rows of the ranking table printed per document
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Write `<stem>.json` graph exports here when set
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            export_dir: None,
        }
    }
}
