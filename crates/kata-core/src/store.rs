use std::collections::HashMap;

use crate::analysis::DocumentAnalysis;

/// Analyses keyed by document id
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<String, DocumentAnalysis>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `analysis`. Returns the analysis it replaced.
    pub fn insert(&mut self, analysis: DocumentAnalysis) -> Option<DocumentAnalysis> {
        self.documents.insert(analysis.document.clone(), analysis)
    }

    pub fn contains(&self, document: &str) -> bool {
        self.documents.contains_key(document)
    }

    pub fn get(&self, document: &str) -> Option<&DocumentAnalysis> {
        self.documents.get(document)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::rank::rank;

    fn analysis(document: &str, tokens: &[&str]) -> DocumentAnalysis {
        let graph = build_graph(tokens, 1).unwrap();
        let ranking = rank(&graph, 0.85).unwrap();
        DocumentAnalysis {
            document: document.to_string(),
            token_count: tokens.len(),
            graph,
            ranking,
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut store = DocumentStore::new();
        assert!(store.is_empty());

        store.insert(analysis("first.txt", &["a", "b", "c"]));
        store.insert(analysis("second.txt", &["x", "y"]));

        assert_eq!(store.len(), 2);
        assert!(store.contains("first.txt"));
        assert_eq!(store.get("second.txt").unwrap().token_count, 2);
        assert!(store.get("third.txt").is_none());
    }

    #[test]
    fn test_replacing_returns_previous() {
        let mut store = DocumentStore::new();
        store.insert(analysis("doc.txt", &["a", "b"]));
        let previous = store.insert(analysis("doc.txt", &["a", "b", "c", "d"]));

        assert_eq!(previous.unwrap().token_count, 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("doc.txt").unwrap().token_count, 4);
    }
}
