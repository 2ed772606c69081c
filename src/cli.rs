use clap::Parser;
use std::path::PathBuf;

use crate::domain::models::MatchLogic;

#[derive(Parser, Debug, Default)]
#[command(name = "episode-ratings")]
#[command(about = "List the best rated episodes of a series from IMDb TSV dumps")]
pub struct Cli {
    /// Series id (tconst) to report on, skipping the title search
    #[arg(long)]
    pub title_id: Option<String>,

    /// Keyword to search titles for (repeatable)
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    /// How multiple keywords are combined
    #[arg(long)]
    pub logic: Option<MatchLogic>,

    /// Treat keywords as regular expressions
    #[arg(long)]
    pub regex: bool,

    /// Minimum rating an episode needs to be listed
    #[arg(short = 't', long)]
    pub threshold: Option<f64>,

    /// Directory holding the TSV dumps
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Title table (title.basics)
    #[arg(long)]
    pub basic_file: Option<PathBuf>,

    /// Episode table (title.episode)
    #[arg(long)]
    pub episode_file: Option<PathBuf>,

    /// Rating table (title.ratings)
    #[arg(long)]
    pub rating_file: Option<PathBuf>,

    /// Neither read nor write the parsed table caches
    #[arg(long)]
    pub no_cache: bool,

    /// Print debug diagnostics to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
