//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! drag, dock and persistence transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=floatdock::workspace=trace` - module-level filtering (includes per-move logs)
//!
//! # Log Files
//!
//! Logs are written to `~/.config/floatdock/logs/floatdock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::workspace::LayoutSnapshot;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering (default `warn`).
/// File logging writes to `~/.config/floatdock/logs/floatdock.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG, stderr so stdout stays machine-readable
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "floatdock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Describe what changed between two layout snapshots
///
/// Returns `None` when nothing observable changed.
pub fn describe_layout_diff(before: &LayoutSnapshot, after: &LayoutSnapshot) -> Option<String> {
    if before.panels.len() != after.panels.len() {
        return Some(format!(
            "panel count: {} → {}",
            before.panels.len(),
            after.panels.len()
        ));
    }

    let mut changes = Vec::new();
    for (b, a) in before.panels.iter().zip(&after.panels) {
        if b.id != a.id {
            changes.push(format!("{} replaced by {}", b.id, a.id));
            continue;
        }
        if b.mode != a.mode || b.side != a.side {
            let side = |s: Option<crate::panel::DockSide>| {
                s.map(|s| format!("({})", s)).unwrap_or_default()
            };
            changes.push(format!(
                "{}: {}{} → {}{}",
                a.id,
                b.mode,
                side(b.side),
                a.mode,
                side(a.side)
            ));
        }
        if b.position != a.position {
            if let Some(p) = a.position {
                changes.push(format!("{}: at ({}, {})", a.id, p.x, p.y));
            }
        }
        if b.size != a.size {
            changes.push(format!("{}: size {}×{}", a.id, a.size.width, a.size.height));
        }
        if b.collapsed != a.collapsed {
            let status = if a.collapsed { "collapsed" } else { "expanded" };
            changes.push(format!("{}: {}", a.id, status));
        }
        if b.visible != a.visible {
            let status = if a.visible { "shown" } else { "hidden" };
            changes.push(format!("{}: {}", a.id, status));
        }
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join("; "))
    }
}
