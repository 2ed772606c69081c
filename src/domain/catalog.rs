use std::collections::HashMap;

use super::models::{EpisodeRow, RatingRow, TitleRow};

/// The three loaded tables, plus identifier indices built once at
/// construction. Read-only after that.
#[derive(Debug, Default)]
pub struct Catalog {
    titles: Vec<TitleRow>,
    episodes: Vec<EpisodeRow>,
    ratings: Vec<RatingRow>,
    title_index: HashMap<String, usize>,
    episode_index: HashMap<String, usize>,
    rating_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(titles: Vec<TitleRow>, episodes: Vec<EpisodeRow>, ratings: Vec<RatingRow>) -> Self {
        let title_index = first_occurrence(titles.iter().map(|row| row.id.as_str()));
        let episode_index = first_occurrence(episodes.iter().map(|row| row.id.as_str()));
        let rating_index = first_occurrence(ratings.iter().map(|row| row.id.as_str()));
        Self {
            titles,
            episodes,
            ratings,
            title_index,
            episode_index,
            rating_index,
        }
    }

    pub fn titles(&self) -> &[TitleRow] {
        &self.titles
    }

    pub fn episodes(&self) -> &[EpisodeRow] {
        &self.episodes
    }

    pub fn title(&self, id: &str) -> Option<&TitleRow> {
        self.title_index.get(id).map(|&i| &self.titles[i])
    }

    pub fn episode(&self, id: &str) -> Option<&EpisodeRow> {
        self.episode_index.get(id).map(|&i| &self.episodes[i])
    }

    pub fn rating(&self, id: &str) -> Option<&RatingRow> {
        self.rating_index.get(id).map(|&i| &self.ratings[i])
    }
}

// Duplicate ids keep the earliest row, so lookups behave like a scan in table order.
fn first_occurrence<'a>(ids: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (row, id) in ids.enumerate() {
        index.entry(id.to_string()).or_insert(row);
    }
    index
}
