use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const CACHE_VERSION: u32 = 1;

/// Parsed rows of one table, stored next to the source file.
#[derive(Debug, Serialize, Deserialize)]
struct CachedTable<T> {
    version: u32,
    rows: T,
}

pub fn get_cache_path(source: &Path) -> PathBuf {
    let mut name = source.as_os_str().to_owned();
    name.push(".cache.json");
    PathBuf::from(name)
}

/// Whether the cache companion of `source` can stand in for it: the cache
/// exists and is at least as new as the source (or the source is gone).
pub fn is_fresh(source: &Path) -> bool {
    let Ok(cache_modified) = fs::metadata(get_cache_path(source)).and_then(|m| m.modified())
    else {
        return false;
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_modified) => cache_modified >= source_modified,
        Err(_) => true,
    }
}

pub fn load<R: DeserializeOwned>(source: &Path) -> Result<Vec<R>> {
    let cache_path = get_cache_path(source);
    let file = fs::File::open(&cache_path)
        .with_context(|| format!("Failed to open cache {}", cache_path.display()))?;
    let cached: CachedTable<Vec<R>> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse cache {}", cache_path.display()))?;
    if cached.version != CACHE_VERSION {
        bail!(
            "Cache {} has version {}, expected {CACHE_VERSION}",
            cache_path.display(),
            cached.version
        );
    }
    Ok(cached.rows)
}

pub fn save<R: Serialize>(source: &Path, rows: &[R]) -> Result<()> {
    let cache_path = get_cache_path(source);
    let directory = match cache_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Write beside the target then rename, so readers never see a partial cache
    let temp = tempfile::NamedTempFile::new_in(directory)
        .with_context(|| format!("Failed to create temp file in {}", directory.display()))?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        serde_json::to_writer(
            &mut writer,
            &CachedTable {
                version: CACHE_VERSION,
                rows,
            },
        )
        .with_context(|| format!("Failed to serialize cache {}", cache_path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to serialize cache {}", cache_path.display()))?;
    }
    temp.persist(&cache_path)
        .with_context(|| format!("Failed to write cache {}", cache_path.display()))?;
    Ok(())
}
