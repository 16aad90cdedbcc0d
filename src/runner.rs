// src/runner.rs
//! The pipeline both frontends call: load (cached or fresh) → score → rank.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use tracing::{debug, info};

use crate::{
    config::options::{AppOptions, CacheOptions},
    error::{Error, LoadError, Result},
    export::{parse_export, read_export},
    file::write_output,
    normalize::normalize,
    rank::{top_n, Report},
    render::render,
    scoring::score,
    store,
    table::StaffTable,
};

/// A normalized table plus where it came from.
pub struct Loaded {
    pub table: StaffTable,
    /// Set when the table was read from this cache file.
    pub cache_hit: Option<PathBuf>,
}

/// Read the export at `input` and normalize it, going through the cache
/// when enabled.
pub fn load_staff(input: &Path, cache: &CacheOptions) -> Result<Loaded> {
    let started = Instant::now();
    let text = read_export(input)?;

    let cache_file = cache
        .enabled
        .then(|| store::cache_path(&cache.dir, input, text.as_bytes()));

    if let Some(path) = &cache_file {
        if path.is_file() {
            let table = store::load_table(path)?;
            info!(
                "time to load '{}' from cache: {:.3}s",
                path.display(),
                started.elapsed().as_secs_f64()
            );
            return Ok(Loaded { table, cache_hit: Some(path.clone()) });
        }
        debug!("Cache: miss for {}", path.display());
    }

    let raw = parse_export(&text).map_err(|source| LoadError::Parse {
        path: input.to_path_buf(),
        source,
    })?;
    info!(
        "time to parse '{}': {:.3}s (rows={}, columns={})",
        input.display(),
        started.elapsed().as_secs_f64(),
        raw.row_count(),
        raw.header_count()
    );

    let normalize_started = Instant::now();
    let table = normalize(raw).map_err(|source| Error::Normalization {
        path: input.to_path_buf(),
        source,
    })?;
    info!(
        "total preprocessing time: {:.3}s (rows kept={})",
        normalize_started.elapsed().as_secs_f64(),
        table.len()
    );

    if let Some(path) = cache_file {
        let write_started = Instant::now();
        store::save_table(&path, &table)?;
        info!(
            "time to write cleaned data to '{}': {:.3}s",
            path.display(),
            write_started.elapsed().as_secs_f64()
        );
    }

    Ok(Loaded { table, cache_hit: None })
}

/// Score `table` with the configured scheme and rank it.
pub fn analyse(table: &mut StaffTable, options: &AppOptions) -> Result<Report> {
    let started = Instant::now();
    score(table, options.scheme)?;
    info!(
        "time to score (scheme={}, rows={}): {:.3}s",
        options.scheme,
        table.len(),
        started.elapsed().as_secs_f64()
    );

    let columns = options.scheme.display_columns(table);
    let report = top_n(table, options.sort_column(), options.count, &columns)?;
    info!(
        "Rank: top {} of {} by {}",
        report.nrows(),
        table.len(),
        report.sort_by
    );
    Ok(report)
}

pub fn run(options: &AppOptions) -> Result<Report> {
    let mut loaded = load_staff(&options.input, &options.cache)?;
    analyse(&mut loaded.table, options)
}

/// Render `report` in the configured format, to `options.out` or stdout.
pub fn emit(report: &Report, options: &AppOptions) -> Result<()> {
    let target = options.out.clone().unwrap_or_else(|| PathBuf::from("<stdout>"));
    let text = render(report, options.format).map_err(|source| Error::Csv {
        path: target.clone(),
        source,
    })?;

    match &options.out {
        Some(path) => {
            write_output(path, &text)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())
                .and_then(|_| if text.ends_with('\n') { Ok(()) } else { writeln!(out) })
                .map_err(|source| Error::Write { path: target, source })?;
        }
    }
    Ok(())
}
