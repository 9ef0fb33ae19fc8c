use kata_types::SkipReason;

use crate::analysis::DocumentAnalysis;

#[derive(Debug, Clone)]
pub enum AppEvent {
    AnalysisReady(Box<DocumentAnalysis>),
    AnalysisSkipped {
        document: String,
        reason: SkipReason,
    },
    AnalysisFailed {
        document: String,
        error: String,
    },
}

impl AppEvent {
    pub fn document(&self) -> &str {
        match self {
            AppEvent::AnalysisReady(analysis) => &analysis.document,
            AppEvent::AnalysisSkipped { document, .. } => document,
            AppEvent::AnalysisFailed { document, .. } => document,
        }
    }
}
