// src/log.rs
//
// Subscriber setup for the logf!/logd!/logw!/loge! macros.
// CLI logs to stderr. The GUI has no console (Windows subsystem), so it
// writes to a debug log file under the temp dir instead.

use std::{
    fs::{self, OpenOptions},
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{APP_NAME, DEFAULT_LOG_FILTER};

#[doc(hidden)]
pub use tracing as __tracing;

#[derive(Clone, Debug)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join(APP_NAME).join("debug.log")
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = fmt().with_env_filter(filter).with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => match open_append(&path) {
            Ok(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            Err(e) => {
                eprintln!("Log file {} unavailable ({e}); logging to stderr", path.display());
                builder.with_writer(io::stderr).try_init()
            }
        },
    };

    if installed.is_ok() {
        logd!("Log: subscriber installed");
    }
}

fn open_append(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
