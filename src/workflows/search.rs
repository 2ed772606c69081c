use anyhow::{bail, Result};
use regex::Regex;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::domain::catalog::Catalog;
use crate::domain::models::{MatchLogic, TitleRow};

/// Source of the user's answers to the selection prompt.
pub trait Prompt {
    /// Next line typed by the user, or an error when input ended.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

pub struct TerminalPrompt {
    editor: DefaultEditor,
}

impl TerminalPrompt {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => bail!("Interrupted"),
            Err(ReadlineError::Eof) => bail!("No selection made (EOF)"),
            Err(err) => Err(err.into()),
        }
    }
}

enum Matcher {
    Substring(String),
    Pattern(Regex),
}

impl Matcher {
    fn is_match(&self, title: &str) -> bool {
        match self {
            Matcher::Substring(keyword) => title.contains(keyword.as_str()),
            Matcher::Pattern(re) => re.is_match(title),
        }
    }
}

/// Titles matching the keywords, in table order. With no keywords nothing
/// matches.
pub fn matching_titles<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    keywords: &[S],
    logic: MatchLogic,
    regex: bool,
) -> Result<Vec<&'a TitleRow>> {
    if keywords.is_empty() {
        return Ok(Vec::new());
    }

    let matchers = keywords
        .iter()
        .map(|keyword| -> Result<Matcher> {
            let keyword: &str = keyword.as_ref();
            Ok(if regex {
                Matcher::Pattern(Regex::new(keyword)?)
            } else {
                Matcher::Substring(keyword.to_string())
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(catalog
        .titles()
        .iter()
        .filter(|row| match logic {
            MatchLogic::And => matchers.iter().all(|m| m.is_match(&row.original_title)),
            MatchLogic::Or => matchers.iter().any(|m| m.is_match(&row.original_title)),
        })
        .collect())
}

/// Search titles and print each hit; returns the matching ids.
pub fn find_title<S: AsRef<str>>(
    catalog: &Catalog,
    keywords: &[S],
    logic: MatchLogic,
    regex: bool,
) -> Result<Vec<String>> {
    let matches = matching_titles(catalog, keywords, logic, regex)?;
    for row in &matches {
        println!("ID = {} Name = {}", row.id, row.original_title);
    }
    Ok(matches.into_iter().map(|row| row.id.clone()).collect())
}

/// Ask until the user types one of `candidates`.
pub fn select_id(candidates: &[String], prompt: &mut dyn Prompt) -> Result<String> {
    if candidates.is_empty() {
        bail!("No titles matched, nothing to select");
    }

    loop {
        let input = prompt.read_line("Select id from list above: ")?;
        let input = input.trim();
        if candidates.iter().any(|c| c == input) {
            return Ok(input.to_string());
        }
        println!("WARNING: User input \"{input}\" not in list");
    }
}
