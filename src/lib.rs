// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod graph;
pub mod logging;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::validate::parse_poll_interval;
use crate::config::{load_settings, Settings};
use crate::engine::{CoreLoop, LoopOptions, TracingReporter, WatchLoop};
use crate::fs::RealFileSystem;
use crate::graph::{load_graph, DependencyGraph};
use crate::watch::spawn_fs_waker;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings loading + CLI overrides
/// - dependency graph loading (fatal on any error)
/// - the watch loop and its reporter
/// - (optional) fs-event wake-ups
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let settings = apply_cli_overrides(settings, &args)?;
    debug!(?settings, "effective settings");

    let graph = Arc::new(load_graph(&settings.dependencies)?);

    if args.dry_run {
        print_dry_run(&graph, &settings);
        return Ok(());
    }

    let options = LoopOptions {
        root: source_root_dir(&settings.dependencies),
        poll_interval: settings.poll_interval,
        watch_dependents: settings.watch_dependents,
    };

    let core = CoreLoop::new(
        Arc::clone(&graph),
        &options,
        Arc::new(RealFileSystem),
        Box::new(TracingReporter),
    );
    let mut watch_loop = WatchLoop::new(core, options.poll_interval);

    // Kept alive for the lifetime of the loop.
    let _waker_handle = if settings.wake_on_fs_events {
        let (handle, wake_rx) = spawn_fs_waker(&options.root, watch_loop.watched())?;
        watch_loop = watch_loop.with_wake_source(wake_rx);
        Some(handle)
    } else {
        None
    };

    // Ctrl-C -> stop at the next idle point.
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    let core = watch_loop.run_until(shutdown).await;
    info!(cycles = core.cycles_completed(), "depwatch exiting");
    Ok(())
}

/// Layer CLI flags over the settings file. Flags only ever switch features
/// on; they never switch off what the file enabled.
pub fn apply_cli_overrides(mut settings: Settings, args: &CliArgs) -> crate::errors::Result<Settings> {
    if let Some(ref deps) = args.deps {
        settings.dependencies = deps.clone();
    }
    if let Some(ref interval) = args.interval {
        settings.poll_interval = parse_poll_interval(interval)?;
    }
    settings.watch_dependents |= args.watch_dependents;
    settings.wake_on_fs_events |= args.wake_on_fs_events;
    Ok(settings)
}

/// Relative graph paths are resolved against the directory holding the
/// dependency source.
///
/// A bare filename like "dependencies.json" (parent = "") means the current
/// working directory.
fn source_root_dir(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Simple dry-run output: settings plus every watched file and its dependents.
fn print_dry_run(graph: &DependencyGraph, settings: &Settings) {
    println!("depwatch dry-run");
    println!("  dependencies = {}", settings.dependencies.display());
    println!("  interval = {:?}", settings.poll_interval);
    println!("  watch_dependents = {}", settings.watch_dependents);
    println!("  wake_on_fs_events = {}", settings.wake_on_fs_events);
    println!();

    let polled = graph.watched_paths(settings.watch_dependents);
    println!("watched files ({}):", polled.len());
    for path in polled.iter() {
        let dependents = graph.dependents_of(path.as_str());
        if dependents.is_empty() {
            println!("  - {path}");
        } else {
            let names: Vec<&str> = dependents.iter().map(|d| d.as_str()).collect();
            println!("  - {path} -> {}", names.join(", "));
        }
    }

    debug!("dry-run complete (no polling)");
}
