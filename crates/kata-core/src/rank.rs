//! PageRank over the co-occurrence graph.
//!
//! Every undirected edge `{u, v}` with weight `w` is walked in both
//! directions; the probability of stepping from `u` to `v` is
//! `w / strength(u)`, where `strength(u)` is the total weight on `u`'s edges.
//!
//! ```text
//! PR(v) = (1-d)/N + d * Σ PR(u) * w(u,v) / strength(u)   over neighbours u
//!       + d * Σ PR(z) / N                               over dangling z
//! ```
//!
//! Nodes without edges (dangling) cannot pass rank along edges, so their mass
//! is spread uniformly instead. Graphs produced by `build_graph` have none,
//! but a hand-built graph may.
//!
//! Iteration stops when the L1 change between rounds drops below
//! `N * tolerance`, or after `max_iterations` rounds. Hitting the cap is not an
//! error: the last iterate is normalized and returned with
//! `converged = false`, since an approximate centrality is still useful for
//! ranking words.

use std::collections::HashMap;

use kata_config::analysis::AnalysisConfig;
use kata_types::RankedWord;
use petgraph::visit::EdgeRef;

use crate::error::CoreError;
use crate::graph::CooccurrenceGraph;

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Power-iteration ranker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRank {
    /// Probability of following an edge instead of teleporting; must lie in (0, 1)
    pub damping: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PageRank {
    pub fn new(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            damping: config.damping,
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(CoreError::invalid(
                "damping",
                format!("must lie strictly between 0 and 1, got {}", self.damping),
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(CoreError::invalid(
                "tolerance",
                format!("must be positive, got {}", self.tolerance),
            ));
        }
        if self.max_iterations < 1 {
            return Err(CoreError::invalid("max_iterations", "must be at least 1"));
        }
        Ok(())
    }

    /// Compute the stationary distribution of `graph`.
    ///
    /// Scores are indexed by node insertion order and sum to 1. An empty graph
    /// gives an empty ranking.
    pub fn rank(&self, graph: &CooccurrenceGraph) -> Result<Ranking, CoreError> {
        self.validate()?;

        let inner = graph.inner();
        let n = inner.node_count();
        if n == 0 {
            return Ok(Ranking::default());
        }

        let strength: Vec<f64> = inner
            .node_indices()
            .map(|node| inner.edges(node).map(|edge| f64::from(*edge.weight())).sum())
            .collect();

        let d = self.damping;
        let nf = n as f64;
        let teleport = (1.0 - d) / nf;

        let mut scores = vec![1.0 / nf; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            let dangling: f64 = strength
                .iter()
                .zip(&scores)
                .filter(|(s, _)| **s == 0.0)
                .map(|(_, score)| *score)
                .sum();

            next.fill(teleport + d * dangling / nf);

            // Edge order is insertion order, so the summation order (and the
            // resulting bits) never depends on hashing.
            for edge in inner.edge_references() {
                let u = edge.source().index();
                let v = edge.target().index();
                let w = f64::from(*edge.weight());
                next[v] += d * scores[u] * w / strength[u];
                next[u] += d * scores[v] * w / strength[v];
            }

            let delta: f64 = next
                .iter()
                .zip(&scores)
                .map(|(new, old)| (new - old).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);

            if delta < nf * self.tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            tracing::warn!(
                iterations,
                nodes = n,
                "PageRank hit the iteration cap before converging, returning approximate scores"
            );
        }

        let total: f64 = scores.iter().sum();
        if total > 0.0 {
            for score in &mut scores {
                *score /= total;
            }
        }

        tracing::debug!(nodes = n, iterations, converged, "Ranked co-occurrence graph");

        Ok(Ranking::new(
            graph.words().map(str::to_string).collect(),
            scores,
            iterations,
            converged,
        ))
    }
}

/// Rank `graph` with the given damping and default tolerance / iteration cap.
pub fn rank(graph: &CooccurrenceGraph, damping: f64) -> Result<Ranking, CoreError> {
    PageRank::new(damping).rank(graph)
}

/// Word scores in node insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    words: Vec<String>,
    scores: Vec<f64>,
    index: HashMap<String, usize>,
    iterations: usize,
    converged: bool,
}

impl Ranking {
    fn new(words: Vec<String>, scores: Vec<f64>, iterations: usize, converged: bool) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.clone(), i))
            .collect();
        Self {
            words,
            scores,
            index,
            iterations,
            converged,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.index.get(word).map(|&i| self.scores[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// False when the iteration cap was reached first
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn to_map(&self) -> HashMap<String, f64> {
        self.iter()
            .map(|(word, score)| (word.to_string(), score))
            .collect()
    }

    /// Rows sorted by descending score. Ties keep node insertion order.
    pub fn table(&self) -> Vec<RankedWord> {
        let mut rows: Vec<RankedWord> = self
            .iter()
            .map(|(word, score)| RankedWord {
                word: word.to_string(),
                score,
            })
            .collect();
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));
        rows
    }

    pub fn top(&self, n: usize) -> Vec<RankedWord> {
        let mut rows = self.table();
        rows.truncate(n);
        rows
    }
}
