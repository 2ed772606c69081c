use std::cmp::Ordering;

use super::episodes::{find_ratings, RatingSeries};
use crate::domain::record::{display_or_dash, Record};

/// Indices that sort `numbers` ascending. Stable; absent numbers go last.
pub fn sort_order(numbers: &[Option<f64>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..numbers.len()).collect();
    order.sort_by(|&a, &b| match (numbers[a], numbers[b]) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    order
}

pub fn permute<T: Clone>(values: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&i| values[i].clone()).collect()
}

impl RatingSeries {
    pub fn reordered(&self, order: &[usize]) -> Self {
        Self {
            ratings: permute(&self.ratings, order),
            votes: permute(&self.votes, order),
            numbers: permute(&self.numbers, order),
        }
    }
}

/// `rating >= threshold`; a missing rating never passes.
pub fn threshold_mask(ratings: &[Option<f64>], threshold: f64) -> Vec<bool> {
    ratings
        .iter()
        .map(|rating| rating.is_some_and(|r| r >= threshold))
        .collect()
}

pub fn format_line(position: usize, record: &Record) -> String {
    format!(
        "{position}: {}x{}  {}  ({}) {}",
        display_or_dash(&record.season),
        display_or_dash(&record.episode),
        display_or_dash(&record.rating.map(|r| format!("{r:.1}"))),
        display_or_dash(&record.votes),
        display_or_dash(&record.title),
    )
}

/// Sort episodes by season/episode, keep those rated at least `threshold`
/// and number them from 1.
pub fn report_lines(records: &[Record], threshold: f64) -> Vec<String> {
    let series = find_ratings(records);
    let order = sort_order(&series.numbers);
    let records = permute(records, &order);
    let series = series.reordered(&order);

    records
        .iter()
        .zip(threshold_mask(&series.ratings, threshold))
        .filter_map(|(record, keep)| keep.then_some(record))
        .enumerate()
        .map(|(idx, record)| format_line(idx + 1, record))
        .collect()
}
