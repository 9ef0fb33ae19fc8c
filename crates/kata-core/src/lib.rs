//! Word co-occurrence graphs and PageRank-style word importance.
//!
//! ```text
//! text ─► TextCleaner ─► tokens ─► build_graph ─► CooccurrenceGraph ─► PageRank ─► Ranking
//! ```
//!
//! `build_graph` and `rank` are pure; everything document-scoped
//! (`Analyzer`, `DocumentStore`) sits on top of them.

pub mod analysis;
pub mod error;
pub mod graph;
pub mod preprocess;
pub mod rank;
pub mod store;
pub mod types;

pub use analysis::{AnalysisOutcome, Analyzer, DocumentAnalysis};
pub use error::CoreError;
pub use graph::{CooccurrenceGraph, build_graph};
pub use preprocess::{TextCleaner, TokenProducer};
pub use rank::{PageRank, Ranking, rank};
pub use store::DocumentStore;
