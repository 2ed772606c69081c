mod cli;
mod config;
mod domain;
mod infra;
mod workflows;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use cli::Cli;
use config::Settings;
use domain::catalog::Catalog;
use domain::record::Record;
use infra::tables;
use workflows::search::{self, Prompt, TerminalPrompt};
use workflows::{episodes, report};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(&cli)?;
    tracing::debug!("Effective settings: {settings:?}");

    let catalog = tables::load_catalog(&settings)?;

    // Determine series ID
    let series_id = match &settings.title_id {
        Some(id) => id.clone(),
        None => {
            let mut prompt = TerminalPrompt::new()?;
            search_and_select_series(&catalog, &settings, &mut prompt)?
        }
    };

    for line in series_report(&catalog, &series_id, settings.rating_threshold) {
        println!("{line}");
    }

    Ok(())
}

fn search_and_select_series(
    catalog: &Catalog,
    settings: &Settings,
    prompt: &mut dyn Prompt,
) -> Result<String> {
    println!("Finding titles");
    let title_ids = search::find_title(
        catalog,
        settings.keywords.as_slice(),
        settings.logic,
        settings.regex,
    )?;

    println!("Selecting title");
    search::select_id(&title_ids, prompt)
}

fn series_report(catalog: &Catalog, series_id: &str, threshold: f64) -> Vec<String> {
    let parent = Record::resolve(catalog, series_id, None);
    println!("{}", parent.info());

    println!("Get episodes for {parent}");
    let episode_ids = episodes::get_episodes(catalog, series_id);

    println!("Resolving {} episodes", episode_ids.len());
    let records = episodes::get_instances(catalog, &episode_ids, Some(&parent));

    report::report_lines(&records, threshold)
}
