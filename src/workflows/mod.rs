pub mod episodes;
pub mod report;
pub mod search;
