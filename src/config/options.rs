// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::scoring::Scheme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Html,
    Csv,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Console => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Csv => "csv",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheOptions {
    pub enabled: bool,
    pub dir: PathBuf,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: PathBuf::from(DEFAULT_CACHE_DIR),
        }
    }
}

/// One run: where the staff come from, how they are scored, what is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub input: PathBuf,
    pub count: usize,
    pub scheme: Scheme,
    /// Ranking column; None → the scheme's default.
    pub sort_by: Option<String>,
    pub cache: CacheOptions,
    pub format: OutputFormat,
    /// None → stdout.
    pub out: Option<PathBuf>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            count: DEFAULT_COUNT,
            scheme: Scheme::Overall,
            sort_by: None,
            cache: CacheOptions::default(),
            format: OutputFormat::Console,
            out: None,
        }
    }
}

impl AppOptions {
    pub fn sort_column(&self) -> &str {
        self.sort_by.as_deref().unwrap_or(self.scheme.default_sort())
    }
}
