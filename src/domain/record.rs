use std::fmt;

use super::catalog::Catalog;

/// One identifier joined against the title, episode and rating tables.
///
/// Joins are best effort: a table without a row for the id leaves its
/// fields as `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub id: String,
    /// Series title, inherited from the parent when it has one.
    pub name: Option<String>,
    /// This record's own title.
    pub title: Option<String>,
    pub season: Option<String>,
    pub episode: Option<String>,
    /// `season + episode / 1000`, only when both parse as integers.
    pub number: Option<f64>,
    pub rating: Option<f64>,
    pub votes: Option<u64>,
}

impl Record {
    pub fn resolve(catalog: &Catalog, id: &str, parent: Option<&Record>) -> Self {
        let mut record = Record {
            id: id.to_string(),
            name: parent.and_then(|p| p.name.clone()),
            ..Record::default()
        };

        if let Some(row) = catalog.title(id) {
            record.title = Some(row.original_title.clone());
            if record.name.is_none() {
                record.name = record.title.clone();
            }
        }

        if let Some(row) = catalog.episode(id) {
            record.season = row.season_number.clone();
            record.episode = row.episode_number.clone();
            record.number = sortable_number(record.season.as_deref(), record.episode.as_deref());
        }

        if let Some(row) = catalog.rating(id) {
            record.rating = Some(row.average_rating);
            record.votes = Some(row.num_votes);
        }

        record
    }

    pub fn info(&self) -> String {
        let mut lines = vec![format!("CODE: {}", self.id)];
        // Only records with their own title row report a name
        if let (Some(_), Some(name)) = (&self.title, &self.name) {
            lines.push(format!("\tName: {name}"));
        }
        if self.season.is_some() || self.episode.is_some() {
            lines.push(format!(
                "\tEpisode: {} x {}",
                display_or_dash(&self.season),
                display_or_dash(&self.episode)
            ));
        }
        if let Some(rating) = self.rating {
            lines.push(format!("\tRating: {rating:.1} ({})", display_or_dash(&self.votes)));
        }
        lines.join("\n")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or(&self.id);
        match self.number {
            Some(number) => write!(f, "{name} ({number:.3})"),
            None => write!(f, "{name}"),
        }
    }
}

pub fn sortable_number(season: Option<&str>, episode: Option<&str>) -> Option<f64> {
    let season: i64 = season?.trim().parse().ok()?;
    let episode: i64 = episode?.trim().parse().ok()?;
    Some(season as f64 + episode as f64 / 1000.0)
}

pub fn display_or_dash<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{EpisodeRow, RatingRow, TitleRow};

    fn assert_number(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("derived number should be set");
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                TitleRow {
                    id: "tt_series".to_string(),
                    original_title: "The Office".to_string(),
                },
                TitleRow {
                    id: "tt_title_only".to_string(),
                    original_title: "Pilot".to_string(),
                },
                TitleRow {
                    id: "tt_full".to_string(),
                    original_title: "Diversity Day".to_string(),
                },
            ],
            vec![
                EpisodeRow {
                    id: "tt_episode_only".to_string(),
                    parent_id: "tt_series".to_string(),
                    season_number: Some("1".to_string()),
                    episode_number: Some("1".to_string()),
                },
                EpisodeRow {
                    id: "tt_full".to_string(),
                    parent_id: "tt_series".to_string(),
                    season_number: Some("1".to_string()),
                    episode_number: Some("2".to_string()),
                },
                EpisodeRow {
                    id: "tt_odd".to_string(),
                    parent_id: "tt_series".to_string(),
                    season_number: Some("Special".to_string()),
                    episode_number: Some("1".to_string()),
                },
            ],
            vec![
                RatingRow {
                    id: "tt_rating_only".to_string(),
                    average_rating: 8.1,
                    num_votes: 1200,
                },
                RatingRow {
                    id: "tt_full".to_string(),
                    average_rating: 8.2,
                    num_votes: 4500,
                },
            ],
        )
    }

    #[test]
    fn test_title_only() {
        let record = Record::resolve(&catalog(), "tt_title_only", None);
        assert_eq!(record.title.as_deref(), Some("Pilot"));
        assert_eq!(record.name.as_deref(), Some("Pilot"));
        assert_eq!(record.season, None);
        assert_eq!(record.episode, None);
        assert_eq!(record.number, None);
        assert_eq!(record.rating, None);
        assert_eq!(record.votes, None);
    }

    #[test]
    fn test_episode_only() {
        let record = Record::resolve(&catalog(), "tt_episode_only", None);
        assert_eq!(record.title, None);
        assert_eq!(record.name, None);
        assert_eq!(record.season.as_deref(), Some("1"));
        assert_eq!(record.episode.as_deref(), Some("1"));
        assert_number(record.number, 1.001);
        assert_eq!(record.rating, None);
        assert_eq!(record.votes, None);
    }

    #[test]
    fn test_rating_only() {
        let record = Record::resolve(&catalog(), "tt_rating_only", None);
        assert_eq!(record.title, None);
        assert_eq!(record.season, None);
        assert_eq!(record.number, None);
        assert_eq!(record.rating, Some(8.1));
        assert_eq!(record.votes, Some(1200));
    }

    #[test]
    fn test_unknown_id_is_empty() {
        let record = Record::resolve(&catalog(), "tt_missing", None);
        assert_eq!(
            record,
            Record {
                id: "tt_missing".to_string(),
                ..Record::default()
            }
        );
    }

    #[test]
    fn test_inherits_parent_name() {
        let catalog = catalog();
        let parent = Record::resolve(&catalog, "tt_series", None);
        let record = Record::resolve(&catalog, "tt_full", Some(&parent));
        assert_eq!(record.name.as_deref(), Some("The Office"));
        assert_eq!(record.title.as_deref(), Some("Diversity Day"));
        assert_number(record.number, 1.002);
        assert_eq!(record.rating, Some(8.2));
        assert_eq!(record.votes, Some(4500));

        let orphan = Record::resolve(&catalog, "tt_episode_only", Some(&parent));
        assert_eq!(orphan.name.as_deref(), Some("The Office"));
        assert_eq!(orphan.title, None);
    }

    #[test]
    fn test_non_numeric_season_leaves_number_unset() {
        let record = Record::resolve(&catalog(), "tt_odd", None);
        assert_eq!(record.season.as_deref(), Some("Special"));
        assert_eq!(record.number, None);
    }

    #[test]
    fn test_sortable_number() {
        assert_number(sortable_number(Some("1"), Some("1")), 1.001);
        assert_number(sortable_number(Some("1"), Some("2")), 1.002);
        assert_number(sortable_number(Some("2"), Some("1")), 2.001);
        assert_number(sortable_number(Some(" 3 "), Some("10")), 3.010);
        assert_eq!(sortable_number(Some("2"), None), None);
        assert_eq!(sortable_number(Some("x"), Some("1")), None);
    }

    #[test]
    fn test_info_and_display() {
        let catalog = catalog();
        let parent = Record::resolve(&catalog, "tt_series", None);
        let record = Record::resolve(&catalog, "tt_full", Some(&parent));
        assert_eq!(
            record.info(),
            "CODE: tt_full\n\tName: The Office\n\tEpisode: 1 x 2\n\tRating: 8.2 (4500)"
        );
        assert_eq!(record.to_string(), "The Office (1.002)");
        assert_eq!(parent.to_string(), "The Office");
        assert_eq!(Record::resolve(&catalog, "tt_missing", None).info(), "CODE: tt_missing");

        let orphan = Record::resolve(&catalog, "tt_episode_only", Some(&parent));
        assert_eq!(orphan.name.as_deref(), Some("The Office"));
        assert_eq!(orphan.info(), "CODE: tt_episode_only\n\tEpisode: 1 x 1");
    }
}
