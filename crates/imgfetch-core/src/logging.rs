//! Tracing setup for imgfetch.
//!
//! Diagnostics go to an append-only file in the XDG state dir so they never mix
//! with the single status line on stdout. Stderr is the fallback target.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const FILE_FILTER: &str = "info,imgfetch=debug,imgfetch_core=debug";
const STDERR_FILTER: &str = "warn";

/// Per-event handle on the shared log file; degrades to stderr if the
/// descriptor cannot be duplicated.
enum EventSink {
    Log(File),
    Stderr(io::Stderr),
}

impl io::Write for EventSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            EventSink::Log(f) => f.write(buf),
            EventSink::Stderr(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            EventSink::Log(f) => f.flush(),
            EventSink::Stderr(e) => e.flush(),
        }
    }
}

struct SharedLog(File);

impl<'a> MakeWriter<'a> for SharedLog {
    type Writer = EventSink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => EventSink::Log(f),
            Err(_) => EventSink::Stderr(io::stderr()),
        }
    }
}

/// `RUST_LOG` wins over the built-in default.
fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// `$XDG_STATE_HOME/imgfetch/imgfetch.log`, usually `~/.local/state/imgfetch/imgfetch.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.get_state_home().join("imgfetch").join("imgfetch.log"))
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

/// Installs the global subscriber writing to [`log_file_path`] and returns that path.
/// Errors leave no subscriber installed; call [`init_logging_stderr`] next.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_log(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_or(FILE_FILTER))
        .with_writer(BoxMakeWriter::new(SharedLog(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!("imgfetch logging to {}", path.display());
    Ok(path)
}

/// Stderr-only subscriber; warnings and up unless `RUST_LOG` says otherwise.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or(STDERR_FILTER))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
