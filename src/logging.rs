use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{Builder, Directive};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{registry, EnvFilter};

/// Directive used when `RUST_LOG` is unset, raised by each `-v`.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "podswitch=info",
        1 => "podswitch=debug",
        _ => "podswitch=trace",
    }
}

fn filter_builder(verbosity: u8) -> Result<Builder> {
    let directive: Directive = default_directive(verbosity)
        .parse()
        .context("Invalid default log directive")?;
    Ok(EnvFilter::builder().with_default_directive(directive))
}

/// Filter from explicit `directives` (same syntax as `RUST_LOG`).
/// Invalid directives are skipped, an empty string means the default.
pub fn filter_from(verbosity: u8, directives: &str) -> Result<EnvFilter> {
    Ok(filter_builder(verbosity)?.parse_lossy(directives))
}

/// Install the global subscriber: stderr, plus `log_file` when given.
///
/// Keep the returned guard alive until exit or buffered file lines are lost.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = filter_builder(verbosity)?.from_env_lossy();

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Log path has no file name: {}", path.display()))?;
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log dir {}", dir.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name.to_string_lossy().into_owned())
                .build(dir)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    registry()
        .with(filter)
        .with(layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
