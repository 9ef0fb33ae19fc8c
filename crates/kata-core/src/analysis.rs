use kata_config::analysis::AnalysisConfig;
use kata_config::text::TextConfig;
use kata_types::{DocumentReport, SkipReason};

use crate::error::CoreError;
use crate::graph::{CooccurrenceGraph, build_graph};
use crate::preprocess::{TextCleaner, TokenProducer};
use crate::rank::{PageRank, Ranking};

/// Graph and ranking of a single document
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub document: String,
    pub token_count: usize,
    pub graph: CooccurrenceGraph,
    pub ranking: Ranking,
}

impl DocumentAnalysis {
    pub fn report(&self) -> DocumentReport {
        DocumentReport {
            document: self.document.clone(),
            token_count: self.token_count,
            converged: self.ranking.converged(),
            iterations: self.ranking.iterations(),
            nodes: self.graph.words().map(str::to_string).collect(),
            edges: self.graph.weighted_edges(),
            ranking: self.ranking.table(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    Analyzed(Box<DocumentAnalysis>),
    Skipped(SkipReason),
}

/// Text → tokens → graph → ranking for one document at a time.
///
/// Holds no per-document state, so one analyzer can be shared across threads.
pub struct Analyzer {
    producer: Box<dyn TokenProducer>,
    ranker: PageRank,
    window_size: usize,
    min_tokens: usize,
}

impl Analyzer {
    pub fn new(analysis: &AnalysisConfig, text: &TextConfig) -> Result<Self, CoreError> {
        Self::with_producer(analysis, Box::new(TextCleaner::from_config(text)))
    }

    pub fn with_producer(
        analysis: &AnalysisConfig,
        producer: Box<dyn TokenProducer>,
    ) -> Result<Self, CoreError> {
        if analysis.window_size < 1 {
            return Err(CoreError::invalid("window_size", "must be at least 1, got 0"));
        }
        let ranker = PageRank::from_config(analysis);
        ranker.validate()?;

        Ok(Self {
            producer,
            ranker,
            window_size: analysis.window_size,
            min_tokens: analysis.min_tokens,
        })
    }

    pub fn analyze(&self, document: &str, text: &str) -> Result<AnalysisOutcome, CoreError> {
        let tokens = self.producer.tokens(text);
        tracing::debug!(document, tokens = tokens.len(), "Cleaned document text");

        if tokens.len() < self.min_tokens {
            return Ok(AnalysisOutcome::Skipped(SkipReason::TooShort {
                tokens: tokens.len(),
                required: self.min_tokens,
            }));
        }

        self.analyze_tokens(document, &tokens)
            .map(|analysis| AnalysisOutcome::Analyzed(Box::new(analysis)))
    }

    /// Analyze an already cleaned token sequence
    pub fn analyze_tokens<S: AsRef<str>>(
        &self,
        document: &str,
        tokens: &[S],
    ) -> Result<DocumentAnalysis, CoreError> {
        let graph = build_graph(tokens, self.window_size)?;
        if graph.is_empty() {
            tracing::warn!(document, tokens = tokens.len(), "Document too short for analysis");
        }
        let ranking = self.ranker.rank(&graph)?;

        Ok(DocumentAnalysis {
            document: document.to_string(),
            token_count: tokens.len(),
            graph,
            ranking,
        })
    }
}
