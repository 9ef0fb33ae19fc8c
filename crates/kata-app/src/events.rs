use std::sync::Arc;

use kanal::AsyncReceiver;
use kata_core::types::AppEvent;
use kata_types::SkipReason;

use crate::report::export_report;
use crate::state::AppState;
use crate::status::{RunSummary, describe_skip};

/// Collects `expected` worker results into the document store.
///
/// Stops early if every sender is gone, which only happens when a worker
/// died without reporting.
pub async fn event_loop(
    state: Arc<AppState>,
    rx: AsyncReceiver<AppEvent>,
    expected: usize,
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for _ in 0..expected {
        let event = match rx.recv().await {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Event channel closed early: {e}");
                break;
            }
        };
        tracing::debug!("Event for {}", event.document());
        handle_event(&state, &mut summary, event).await;
    }

    tracing::debug!("All workers finished, {} documents handled", summary.total());
    Ok(summary)
}

async fn handle_event(state: &AppState, summary: &mut RunSummary, event: AppEvent) {
    match event {
        AppEvent::AnalysisReady(analysis) => {
            let document = analysis.document.clone();

            {
                let mut store = state.store.write().await;
                if store.contains(&document) {
                    tracing::info!("Skipping {document}: already analyzed");
                    summary.skipped.push((document, SkipReason::AlreadyAnalyzed));
                    return;
                }
                store.insert(*analysis);
            }

            if let Some(dir) = &state.config.output.export_dir {
                let store = state.store.read().await;
                if let Some(analysis) = store.get(&document) {
                    match export_report(dir, analysis).await {
                        Ok(path) => tracing::info!("Exported {document} to {}", path.display()),
                        Err(e) => {
                            tracing::error!("Failed to export {document}: {e:#}");
                            summary.failed.push((document, format!("export failed: {e:#}")));
                            return;
                        }
                    }
                }
            }

            tracing::info!("Analyzed {document}");
            summary.analyzed.push(document);
        }
        AppEvent::AnalysisSkipped { document, reason } => {
            tracing::warn!("Skipping {document}: {}", describe_skip(&reason));
            summary.skipped.push((document, reason));
        }
        AppEvent::AnalysisFailed { document, error } => {
            tracing::error!("Failed to analyze {document}: {error}");
            summary.failed.push((document, error));
        }
    }
}
