use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

use super::cache;
use crate::config::Settings;
use crate::domain::catalog::Catalog;

/// Load one table, preferring a fresh cache companion over the TSV source.
pub fn load<R>(name: &str, path: &Path, use_cache: bool) -> Result<Vec<R>>
where
    R: DeserializeOwned + Serialize,
{
    println!("Loading {name} table");

    if use_cache && cache::is_fresh(path) {
        match cache::load(path) {
            Ok(rows) => {
                debug!("Using cached {name} table for {}", path.display());
                return Ok(rows);
            }
            Err(e) => warn!("Ignoring unreadable {name} cache: {e:#}"),
        }
    }

    let rows: Vec<R> = parse_tsv(path)?;
    debug!("Parsed {} {name} rows from {}", rows.len(), path.display());

    if use_cache {
        if let Err(e) = cache::save(path, &rows) {
            warn!("Failed to save {name} cache: {e:#}");
        }
    }

    Ok(rows)
}

pub fn parse_tsv<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    // IMDb dumps are not quoted and contain bare `"` inside titles
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b'\t')
        .quoting(false)
        .from_reader(BufReader::new(file));

    reader
        .deserialize::<R>()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn load_catalog(settings: &Settings) -> Result<Catalog> {
    let titles = load("basic", &settings.basic_file, settings.use_cache)?;
    let episodes = load("episode", &settings.episode_file, settings.use_cache)?;
    let ratings = load("rating", &settings.rating_file, settings.use_cache)?;
    Ok(Catalog::new(titles, episodes, ratings))
}
