use crate::domain::catalog::Catalog;
use crate::domain::record::Record;

const PROGRESS_EVERY: usize = 50;

/// Episode ids whose parent is `parent_id`, in table order.
pub fn get_episodes(catalog: &Catalog, parent_id: &str) -> Vec<String> {
    catalog
        .episodes()
        .iter()
        .filter(|row| row.parent_id == parent_id)
        .map(|row| row.id.clone())
        .collect()
}

pub fn get_instances(catalog: &Catalog, ids: &[String], parent: Option<&Record>) -> Vec<Record> {
    let total = ids.len();
    ids.iter()
        .enumerate()
        .map(|(idx, id)| {
            if (idx + 1) % PROGRESS_EVERY == 0 {
                println!("  Resolved {}/{} episodes...", idx + 1, total);
            }
            Record::resolve(catalog, id, parent)
        })
        .collect()
}

/// Ratings, votes and sortable numbers of `records`, index-aligned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingSeries {
    pub ratings: Vec<Option<f64>>,
    pub votes: Vec<Option<u64>>,
    pub numbers: Vec<Option<f64>>,
}

pub fn find_ratings(records: &[Record]) -> RatingSeries {
    RatingSeries {
        ratings: records.iter().map(|r| r.rating).collect(),
        votes: records.iter().map(|r| r.votes).collect(),
        numbers: records.iter().map(|r| r.number).collect(),
    }
}
