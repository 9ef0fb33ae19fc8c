use std::path::{Path, PathBuf};
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kata_core::AnalysisOutcome;
use kata_core::types::AppEvent;
use kata_types::SkipReason;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::io::{document_id, read_document};
use crate::state::AppState;

/// Worker → event loop channel
pub struct ChannelSet {
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns one analysis task per document and owns their cancellation
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_workers(&self, files: Vec<PathBuf>, tx: AsyncSender<AppEvent>) -> JoinSet<()> {
        let mut tasks = JoinSet::new();

        for path in files {
            tasks.spawn(analyze_document(
                self.state.clone(),
                path,
                tx.clone(),
                self.cancel_token.child_token(),
            ));
        }

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

async fn analyze_document(
    state: Arc<AppState>,
    path: PathBuf,
    tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) {
    let document = document_id(&path);
    let event = document_event(state, &path, document.clone(), cancel).await;

    if let Err(e) = tx.send(event).await {
        tracing::error!("Failed to report result for {document}: {e}");
    }
}

async fn document_event(
    state: Arc<AppState>,
    path: &Path,
    document: String,
    cancel: CancellationToken,
) -> AppEvent {
    if cancel.is_cancelled() {
        return AppEvent::AnalysisSkipped {
            document,
            reason: SkipReason::Cancelled,
        };
    }

    if state.store.read().await.contains(&document) {
        return AppEvent::AnalysisSkipped {
            document,
            reason: SkipReason::AlreadyAnalyzed,
        };
    }

    let text = match read_document(path).await {
        Ok(text) => text,
        Err(e) => {
            return AppEvent::AnalysisFailed {
                document,
                error: format!("{e:#}"),
            };
        }
    };

    tracing::info!("Analyzing {document} ({} bytes)", text.len());

    let analyzer = state.analyzer.clone();
    let doc = document.clone();
    let outcome = tokio::task::spawn_blocking(move || analyzer.analyze(&doc, &text)).await;

    match outcome {
        Ok(Ok(AnalysisOutcome::Analyzed(analysis))) => AppEvent::AnalysisReady(analysis),
        Ok(Ok(AnalysisOutcome::Skipped(reason))) => AppEvent::AnalysisSkipped { document, reason },
        Ok(Err(e)) => AppEvent::AnalysisFailed {
            document,
            error: e.to_string(),
        },
        Err(e) => AppEvent::AnalysisFailed {
            document,
            error: format!("analysis task panicked: {e}"),
        },
    }
}
