use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::domain::models::MatchLogic;

pub const DATA_DIR_ENV: &str = "EPISODE_RATINGS_DATA_DIR";

const DEFAULT_BASIC_FILE: &str = "basic_data.tsv";
const DEFAULT_EPISODE_FILE: &str = "episode_data.tsv";
const DEFAULT_RATING_FILE: &str = "rating_data.tsv";
const DEFAULT_KEYWORDS: &[&str] = &["The Office"];
const DEFAULT_RATING_THRESHOLD: f64 = 7.0;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    data_dir: Option<PathBuf>,
    basic_file: Option<PathBuf>,
    episode_file: Option<PathBuf>,
    rating_file: Option<PathBuf>,
    keywords: Option<Vec<String>>,
    title_id: Option<String>,
    rating_threshold: Option<f64>,
    logic: Option<MatchLogic>,
}

/// Effective settings for one run, after merging flags, environment,
/// config file and defaults (in that order of precedence).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub basic_file: PathBuf,
    pub episode_file: PathBuf,
    pub rating_file: PathBuf,
    pub keywords: Vec<String>,
    pub title_id: Option<String>,
    pub rating_threshold: f64,
    pub logic: MatchLogic,
    pub regex: bool,
    pub use_cache: bool,
}

impl Settings {
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = read_config_file(&get_config_path())?;
        let env_data_dir = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        Ok(Self::merge(cli, env_data_dir, config))
    }

    pub fn merge(cli: &Cli, env_data_dir: Option<PathBuf>, config: ConfigFile) -> Self {
        let data_dir = cli
            .data_dir
            .clone()
            .or(env_data_dir)
            .or(config.data_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        // Relative table paths are taken from the data directory
        let table_path = |flag: &Option<PathBuf>, file: Option<PathBuf>, default: &str| {
            let path = flag
                .clone()
                .or(file)
                .unwrap_or_else(|| PathBuf::from(default));
            if path.is_absolute() {
                path
            } else {
                data_dir.join(path)
            }
        };

        let keywords = if cli.keywords.is_empty() {
            config
                .keywords
                .unwrap_or_else(|| DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect())
        } else {
            cli.keywords.clone()
        };

        Self {
            basic_file: table_path(&cli.basic_file, config.basic_file, DEFAULT_BASIC_FILE),
            episode_file: table_path(&cli.episode_file, config.episode_file, DEFAULT_EPISODE_FILE),
            rating_file: table_path(&cli.rating_file, config.rating_file, DEFAULT_RATING_FILE),
            keywords,
            title_id: cli.title_id.clone().or(config.title_id),
            rating_threshold: cli
                .threshold
                .or(config.rating_threshold)
                .unwrap_or(DEFAULT_RATING_THRESHOLD),
            logic: cli.logic.or(config.logic).unwrap_or_default(),
            regex: cli.regex,
            use_cache: !cli.no_cache,
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    tracing::debug!("Reading config from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("episode-ratings"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}
