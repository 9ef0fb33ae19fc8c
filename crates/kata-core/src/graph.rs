//! Word co-occurrence graph.
//!
//! Nodes are distinct words, edges are unordered word pairs weighted by how
//! often the pair appeared inside the forward window. Every pair is stored
//! with its endpoints in lexicographic order, so `{a, b}` and `{b, a}` hit the
//! same edge and parallel edges never appear.

use std::collections::HashMap;

use kata_types::WeightedEdge;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::CoreError;

/// Undirected weighted word graph.
///
/// Node and edge indices follow insertion order, which is what keeps ranking
/// and tie-breaking deterministic.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceGraph {
    graph: UnGraph<String, u32>,
    nodes: HashMap<String, NodeIndex>,
    edges: HashMap<(NodeIndex, NodeIndex), EdgeIndex>,
}

impl CooccurrenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` as a node if it is not present yet.
    pub fn add_word(&mut self, word: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(word) {
            return idx;
        }
        let idx = self.graph.add_node(word.to_string());
        self.nodes.insert(word.to_string(), idx);
        idx
    }

    /// Count one co-occurrence of `a` and `b`.
    ///
    /// Returns the pair's accumulated weight, or `None` when `a == b`
    /// (self-loops are never recorded).
    pub fn record_pair(&mut self, a: &str, b: &str) -> Option<u32> {
        if a == b {
            return None;
        }
        let (lo, hi) = canonical(a, b);
        let lo_idx = self.add_word(lo);
        let hi_idx = self.add_word(hi);

        let existing = self.edges.get(&(lo_idx, hi_idx)).copied();
        let weight = match existing {
            Some(edge) => {
                let weight = &mut self.graph[edge];
                *weight += 1;
                *weight
            }
            None => {
                let edge = self.graph.add_edge(lo_idx, hi_idx, 1);
                self.edges.insert((lo_idx, hi_idx), edge);
                1
            }
        };
        Some(weight)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, word: &str) -> bool {
        self.nodes.contains_key(word)
    }

    /// Weight of the edge between `a` and `b`, in either order.
    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        let (lo, hi) = canonical(a, b);
        let key = (*self.nodes.get(lo)?, *self.nodes.get(hi)?);
        self.edges.get(&key).map(|&edge| self.graph[edge])
    }

    /// Sum of the weights of all edges touching `word`.
    pub fn strength(&self, word: &str) -> Option<u32> {
        let idx = *self.nodes.get(word)?;
        Some(self.graph.edges(idx).map(|edge| *edge.weight()).sum())
    }

    /// Words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
    }

    /// `(lo, hi, weight)` triples in insertion order, `lo < hi`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
                *edge.weight(),
            )
        })
    }

    pub fn weighted_edges(&self) -> Vec<WeightedEdge> {
        self.edges()
            .map(|(source, target, weight)| WeightedEdge {
                source: source.to_string(),
                target: target.to_string(),
                weight,
            })
            .collect()
    }

    pub(crate) fn inner(&self) -> &UnGraph<String, u32> {
        &self.graph
    }
}

impl PartialEq for CooccurrenceGraph {
    fn eq(&self, other: &Self) -> bool {
        self.words().eq(other.words()) && self.edges().eq(other.edges())
    }
}

fn canonical<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Build the co-occurrence graph of `tokens`.
///
/// Each token at position `i` is paired with the `window_size` tokens that
/// follow it, for `i` in `0..len - window_size`. The window only looks
/// forward, so the last `window_size` tokens never act as targets themselves.
/// A sequence no longer than `window_size` yields an empty graph.
pub fn build_graph<S: AsRef<str>>(
    tokens: &[S],
    window_size: usize,
) -> Result<CooccurrenceGraph, CoreError> {
    if window_size < 1 {
        return Err(CoreError::invalid("window_size", "must be at least 1, got 0"));
    }

    let mut graph = CooccurrenceGraph::new();

    if tokens.len() <= window_size {
        tracing::debug!(
            tokens = tokens.len(),
            window_size,
            "Token sequence too short for any co-occurrence"
        );
        return Ok(graph);
    }

    for i in 0..tokens.len() - window_size {
        let target = tokens[i].as_ref();
        for neighbor in &tokens[i + 1..i + 1 + window_size] {
            graph.record_pair(target, neighbor.as_ref());
        }
    }

    tracing::debug!(
        tokens = tokens.len(),
        window_size,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Built co-occurrence graph"
    );

    Ok(graph)
}
