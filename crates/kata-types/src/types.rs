use serde::{Deserialize, Serialize};

/// One row of a ranking table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub score: f64,
}

/// Undirected weighted edge, endpoints in canonical (sorted) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Graph and ranking of one document, as handed to a presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    pub document: String,
    pub token_count: usize,
    pub converged: bool,
    pub iterations: usize,
    pub nodes: Vec<String>,
    pub edges: Vec<WeightedEdge>,
    pub ranking: Vec<RankedWord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer cleaned tokens than the configured minimum
    TooShort { tokens: usize, required: usize },
    /// Already present in the document store
    AlreadyAnalyzed,
    /// Work was cancelled before the document was picked up
    Cancelled,
}
