//! floatdock - replay panel gestures through the layout engine
//!
//! Reads a YAML script, runs it against a fresh workspace and prints the
//! final layout snapshot as JSON (plus every event with `--events`).

use anyhow::{Context, Result};
use clap::Parser;

use floatdock::cli::CliArgs;
use floatdock::panel::FileStore;
use floatdock::script::Script;
use floatdock::workspace::Workspace;

fn main() -> Result<()> {
    floatdock::tracing::init();

    let args = CliArgs::parse();
    let config = args.layout_config();

    let source = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script = Script::from_yaml(&source)
        .with_context(|| format!("Failed to parse script {}", args.script.display()))?;

    let mut workspace = match &args.store {
        Some(Some(dir)) => Workspace::with_store(&config, Box::new(FileStore::new(dir))),
        Some(None) => {
            let store = FileStore::in_config_dir().context("No config directory available")?;
            tracing::debug!("persisting panels under {}", store.dir().display());
            Workspace::with_store(&config, Box::new(store))
        }
        None => Workspace::new(&config),
    };

    tracing::info!(
        panels = script.panels.len(),
        steps = script.steps.len(),
        "replaying {}",
        args.script.display()
    );
    let events = script.run(&mut workspace);

    if args.events {
        for event in events.iter().filter(|e| !e.is_layout_change()) {
            println!("{}", serde_json::to_string(event)?);
        }
    }

    let snapshot = workspace.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
