// src/log.rs
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

fn open_log_file() -> Option<File> {
    fs::create_dir_all(STORE_DIR).ok()?;
    OpenOptions::new().create(true).append(true).open(log_path()).ok()
}

/// Install the global subscriber: stderr plus `.store/debug.log`, both
/// stamped with time since start. `RUST_LOG` overrides `default_level`.
/// Calling it twice is harmless.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("staff_search={default_level}")));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_target(false);

    // The file is best-effort; console logging works without it.
    let file = open_log_file().map(|f| {
        fmt::layer()
            .with_writer(Mutex::new(f))
            .with_ansi(false)
            .with_timer(fmt::time::uptime())
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init();
}
