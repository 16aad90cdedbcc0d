// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::options::OutputFormat;
use crate::error::{Error, Result};
use crate::scoring::Scheme;

/// Write a rendered report, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let wrap = |source| Error::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(wrap)?;
        }
    }
    fs::write(path, contents).map_err(wrap)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// "<scheme>_top<n>.<ext>" next to `dir`, e.g. `coaching_top10.html`.
pub fn default_export_path(dir: &Path, scheme: Scheme, count: usize, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}_top{}.{}", scheme.name(), count, format.ext()))
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// A user-typed output path: a directory (existing, or ending in a
/// separator) gets the default file name appended.
pub fn resolve_out_path(user: &Path, scheme: Scheme, count: usize, format: OutputFormat) -> PathBuf {
    if looks_like_dir_hint(user) || user.is_dir() {
        default_export_path(user, scheme, count, format)
    } else {
        user.to_path_buf()
    }
}
