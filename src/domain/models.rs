use serde::{Deserialize, Deserializer, Serialize};

/// IMDb marks missing values with a literal `\N`.
const IMDB_NULL: &str = "\\N";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TitleRow {
    #[serde(rename = "tconst")]
    pub id: String,
    #[serde(rename = "originalTitle")]
    pub original_title: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EpisodeRow {
    #[serde(rename = "tconst")]
    pub id: String,
    #[serde(rename = "parentTconst")]
    pub parent_id: String,
    #[serde(rename = "seasonNumber", deserialize_with = "nullable")]
    pub season_number: Option<String>,
    #[serde(rename = "episodeNumber", deserialize_with = "nullable")]
    pub episode_number: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RatingRow {
    #[serde(rename = "tconst")]
    pub id: String,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "numVotes")]
    pub num_votes: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchLogic {
    /// Every keyword must match
    #[default]
    And,
    /// Any keyword may match
    Or,
}

fn nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty() && v != IMDB_NULL))
}
