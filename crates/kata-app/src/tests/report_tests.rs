use std::path::PathBuf;

use kata_core::{DocumentAnalysis, DocumentStore, build_graph, rank};

use crate::profile::{Profile, base_config, load_profile, save_profile};
use crate::report::{export_report, in_file_order, render_summary, render_table};

fn analysis() -> DocumentAnalysis {
    analysis_named("notes.txt")
}

fn analysis_named(document: &str) -> DocumentAnalysis {
    let tokens = ["hub", "one", "hub", "two", "hub", "three"];
    let graph = build_graph(&tokens, 1).unwrap();
    let ranking = rank(&graph, 0.85).unwrap();
    DocumentAnalysis {
        document: document.to_string(),
        token_count: tokens.len(),
        graph,
        ranking,
    }
}

#[test]
fn test_summary_line() {
    assert_eq!(
        render_summary(&analysis()),
        "notes.txt: 6 tokens | 4 nodes | 3 edges"
    );
}

#[test]
fn test_table_is_sorted_and_truncated() {
    let table = render_table(&analysis(), 2);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("rank") && lines[0].contains("score"));
    assert!(lines[1].trim_start().starts_with("1  hub"));
}

#[test]
fn test_documents_follow_file_order() {
    let mut store = DocumentStore::new();
    for document in ["gamma.txt", "alpha.txt", "beta.txt"] {
        store.insert(analysis_named(document));
    }

    let files: Vec<PathBuf> = [
        "docs/beta.txt",
        "alpha.txt",
        "missing.txt",
        "docs/gamma.txt",
        "beta.txt",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect();
    let order: Vec<&str> = in_file_order(&store, &files)
        .into_iter()
        .map(|analysis| analysis.document.as_str())
        .collect();

    assert_eq!(order, vec!["beta.txt", "alpha.txt", "gamma.txt"]);
}

#[tokio::test]
async fn test_export_writes_named_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_report(dir.path(), &analysis()).await.unwrap();

    assert_eq!(path, dir.path().join("notes.txt.json"));
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["document"], "notes.txt");
    assert_eq!(value["edges"].as_array().unwrap().len(), 3);
    assert_eq!(value["ranking"][0]["word"], "hub");
}

#[test]
fn test_profile_roundtrip_keeps_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles").join("wide.json");

    let mut config = kata_config::Config::default();
    config.analysis.window_size = 4;
    save_profile(
        &path,
        &Profile {
            name: "wide".to_string(),
            value: config.clone(),
        },
    )
    .unwrap();

    let loaded = load_profile(&path).unwrap();
    assert_eq!(loaded.name, "wide");
    assert_eq!(loaded.value, config);
}

#[test]
fn test_missing_profile_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = base_config(Some(&dir.path().join("nope.json")))
        .err()
        .expect("missing profile should fail");
    assert!(format!("{err:#}").contains("nope.json"));
}
