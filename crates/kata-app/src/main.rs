use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod report;
pub mod state;
pub mod status;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::controller::{AppController, ChannelSet};
use self::events::event_loop;
use self::profile::{Profile, base_config, save_profile};
use self::report::{in_file_order, render_summary, render_table};
use self::state::AppState;
use self::status::{RunSummary, describe_skip};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = base_config(cli.profile.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    if let Some(path) = &cli.write_profile {
        let profile = Profile {
            name: path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "main".to_string()),
            value: config,
        };
        return save_profile(path, &profile);
    }

    let top_n = config.output.top_n;
    let state = Arc::new(AppState::new(config)?);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let summary = run(state.clone(), cli.files.clone(), shutdown).await?;

    let store = state.store.read().await;
    for analysis in in_file_order(&store, &cli.files) {
        println!("{}", render_summary(analysis));
        println!("{}", render_table(analysis, top_n));
    }
    for (document, reason) in &summary.skipped {
        println!("{document}: skipped, {}", describe_skip(reason));
    }
    for (document, error) in &summary.failed {
        println!("{document}: failed, {error}");
    }

    if !summary.failed.is_empty() {
        anyhow::bail!("{} of {} documents failed", summary.failed.len(), summary.total());
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Analyze `files` concurrently and collect the results into the store.
///
/// When `shutdown` resolves, documents that have not started are skipped;
/// documents already in flight still finish.
pub async fn run(
    state: Arc<AppState>,
    files: Vec<PathBuf>,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<RunSummary> {
    let ChannelSet {
        events: (tx, rx),
    } = ChannelSet::new();

    let expected = files.len();
    let controller = AppController::new(state.clone());
    let mut workers = controller.spawn_workers(files, tx);
    let collector = tokio::spawn(event_loop(state, rx, expected));

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown, if !controller.is_cancelled() => {
                tracing::info!("Shutdown requested, skipping pending documents");
                controller.shutdown();
            }
            joined = workers.join_next() => match joined {
                Some(Ok(())) => {}
                Some(Err(e)) => tracing::error!("worker task panicked: {e}"),
                None => break,
            }
        }
    }

    collector.await?
}
