use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use kata_core::{DocumentAnalysis, DocumentStore};

use crate::io::document_id;

pub fn render_summary(analysis: &DocumentAnalysis) -> String {
    format!(
        "{}: {} tokens | {} nodes | {} edges",
        analysis.document,
        analysis.token_count,
        analysis.graph.node_count(),
        analysis.graph.edge_count(),
    )
}

/// Top `top_n` rows of the ranking table, highest score first
pub fn render_table(analysis: &DocumentAnalysis, top_n: usize) -> String {
    let rows = analysis.ranking.top(top_n);
    let width = rows
        .iter()
        .map(|row| row.word.chars().count())
        .max()
        .unwrap_or(0)
        .max("word".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:<width$}  {:>8}", "rank", "word", "score");
    for (i, row) in rows.iter().enumerate() {
        let _ = writeln!(out, "{:>4}  {:<width$}  {:>8.6}", i + 1, row.word, row.score);
    }
    if !analysis.ranking.converged() && !analysis.ranking.is_empty() {
        let _ = writeln!(
            out,
            "(approximate: not converged after {} iterations)",
            analysis.ranking.iterations()
        );
    }
    out
}

/// Stored analyses in the order `files` were given, each document once
pub fn in_file_order<'a>(
    store: &'a DocumentStore,
    files: &[PathBuf],
) -> Vec<&'a DocumentAnalysis> {
    let mut seen = Vec::new();
    let mut ordered = Vec::new();
    for path in files {
        let document = document_id(path);
        if seen.contains(&document) {
            continue;
        }
        if let Some(analysis) = store.get(&document) {
            ordered.push(analysis);
        }
        seen.push(document);
    }
    ordered
}

/// Write the document's graph and ranking to `<dir>/<document>.json`
pub async fn export_report(dir: &Path, analysis: &DocumentAnalysis) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let path = dir.join(format!("{}.json", analysis.document));

    let json = serde_json::to_string_pretty(&analysis.report())?;
    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}
