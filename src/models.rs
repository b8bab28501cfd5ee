use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of one cleaning pass over an input list.
///
/// `cleaned` holds the surviving addresses after deduplication, sorted so
/// output is stable across runs; `cleaned_count` always equals
/// `cleaned.len()`.
#[derive(Serialize, Debug, PartialEq, Deserialize)]
pub struct CleaningReport {
    pub cleaned: Vec<String>,
    pub cleaned_count: usize,
    pub invalid_count: usize,
    pub inactive_count: usize,
    pub spam_trap_count: usize,
}

impl CleaningReport {
    pub fn new(
        cleaned: HashSet<String>,
        invalid_count: usize,
        inactive_count: usize,
        spam_trap_count: usize,
    ) -> Self {
        let mut cleaned: Vec<String> = cleaned.into_iter().collect();
        cleaned.sort();

        Self {
            cleaned_count: cleaned.len(),
            cleaned,
            invalid_count,
            inactive_count,
            spam_trap_count,
        }
    }
}
