//! End-to-end runs over temporary documents

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use kata_config::Config;
use kata_types::SkipReason;
use tokio::time::timeout;

use crate::run;
use crate::state::AppState;

const ARTICLE: &str = "Jaringan kata dibangun dari kemunculan bersama. \
    Jaringan kata membantu memahami topik utama dokumen. \
    Kemunculan bersama kata dihitung dalam jendela geser.";

fn write_doc(dir: &tempfile::TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn state_with(config: Config) -> Arc<AppState> {
    Arc::new(AppState::new(config).unwrap())
}

#[tokio::test]
async fn test_run_stores_every_analyzed_document() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_doc(&dir, "first.txt", ARTICLE);
    let second = write_doc(&dir, "second.txt", "graph ranking words graph nodes ranking edges");

    let state = state_with(Config::default());
    let summary = timeout(
        Duration::from_secs(10),
        run(state.clone(), vec![first, second], std::future::pending()),
    )
    .await
    .expect("run timed out")
    .unwrap();

    assert_eq!(summary.analyzed.len(), 2);
    assert!(summary.failed.is_empty());

    let store = state.store.read().await;
    assert_eq!(store.len(), 2);

    let article = store.get("first.txt").unwrap();
    assert!(article.token_count >= 6);
    let total: f64 = article.ranking.iter().map(|(_, score)| score).sum();
    assert!((total - 1.0).abs() < 1e-6);

    let top = article.ranking.top(1);
    assert!(["jaringan", "kata", "kemunculan", "bersama"].contains(&top[0].word.as_str()));
}

#[tokio::test]
async fn test_short_and_missing_documents_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let short = write_doc(&dir, "short.txt", "hanya tiga kata");
    let missing = dir.path().join("missing.txt");

    let state = state_with(Config::default());
    let summary = run(state.clone(), vec![short, missing], std::future::pending())
        .await
        .unwrap();

    assert!(summary.analyzed.is_empty());
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].0, "short.txt");
    assert!(matches!(summary.skipped[0].1, SkipReason::TooShort { tokens: 3, required: 6 }));
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, "missing.txt");
    assert!(state.store.read().await.is_empty());
}

#[tokio::test]
async fn test_same_document_twice_is_analyzed_once() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(&dir, "paper.txt", ARTICLE);

    let state = state_with(Config::default());
    let summary = run(state.clone(), vec![doc.clone(), doc], std::future::pending())
        .await
        .unwrap();

    assert_eq!(summary.analyzed, vec!["paper.txt".to_string()]);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].1, SkipReason::AlreadyAnalyzed);
    assert_eq!(state.store.read().await.len(), 1);
}

#[tokio::test]
async fn test_rerun_skips_documents_already_in_store() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(&dir, "paper.txt", ARTICLE);

    let state = state_with(Config::default());
    run(state.clone(), vec![doc.clone()], std::future::pending())
        .await
        .unwrap();
    let summary = run(state.clone(), vec![doc], std::future::pending())
        .await
        .unwrap();

    assert!(summary.analyzed.is_empty());
    assert_eq!(summary.skipped[0].1, SkipReason::AlreadyAnalyzed);
}

#[tokio::test]
async fn test_shutdown_still_accounts_for_every_document() {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<PathBuf> = (0..8)
        .map(|i| write_doc(&dir, &format!("doc{i}.txt"), ARTICLE))
        .collect();

    let state = state_with(Config::default());
    let summary = timeout(
        Duration::from_secs(10),
        run(state.clone(), files, async {}),
    )
    .await
    .expect("run timed out")
    .unwrap();

    assert_eq!(summary.total(), 8);
    assert!(summary.failed.is_empty());
    for (_, reason) in &summary.skipped {
        assert_eq!(*reason, SkipReason::Cancelled);
    }
    assert_eq!(state.store.read().await.len(), summary.analyzed.len());
}

#[tokio::test]
async fn test_export_dir_receives_json() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(&dir, "paper.txt", ARTICLE);
    let export_dir = dir.path().join("exports");

    let mut config = Config::default();
    config.output.export_dir = Some(export_dir.clone());
    let state = state_with(config);

    run(state, vec![doc], std::future::pending()).await.unwrap();

    let json = std::fs::read_to_string(export_dir.join("paper.txt.json")).unwrap();
    let report: kata_types::DocumentReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report.document, "paper.txt");
    assert!(!report.edges.is_empty());
    assert_eq!(report.nodes.len(), report.ranking.len());
}

#[tokio::test]
async fn test_documents_sharing_a_stem_export_separately() {
    let dir = tempfile::tempdir().unwrap();
    let txt = write_doc(&dir, "paper.txt", ARTICLE);
    let md = write_doc(&dir, "paper.md", "graph ranking words graph nodes ranking edges");
    let export_dir = dir.path().join("exports");

    let mut config = Config::default();
    config.output.export_dir = Some(export_dir.clone());
    let state = state_with(config);

    let summary = run(state, vec![txt, md], std::future::pending()).await.unwrap();
    assert_eq!(summary.analyzed.len(), 2);

    for document in ["paper.txt", "paper.md"] {
        let json = std::fs::read_to_string(export_dir.join(format!("{document}.json"))).unwrap();
        let report: kata_types::DocumentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.document, document);
    }
}

#[tokio::test]
async fn test_export_failure_is_reported_per_document() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_doc(&dir, "first.txt", ARTICLE);
    let second = write_doc(&dir, "second.txt", "graph ranking words graph nodes ranking edges");
    let blocker = write_doc(&dir, "blocker", "not a directory");

    let mut config = Config::default();
    config.output.export_dir = Some(blocker.join("sub"));
    let state = state_with(config);

    let summary = timeout(
        Duration::from_secs(10),
        run(state.clone(), vec![first, second], std::future::pending()),
    )
    .await
    .expect("run timed out")
    .unwrap();

    assert_eq!(summary.total(), 2);
    assert!(summary.analyzed.is_empty());
    assert_eq!(summary.failed.len(), 2);
    for (_, error) in &summary.failed {
        assert!(error.contains("export directory"), "{error}");
    }

    let store = state.store.read().await;
    assert!(store.contains("first.txt"));
    assert!(store.contains("second.txt"));
}
