//! Error-ranked view over the word library, plus retesting.

use crate::error::Result;
use crate::quiz::QuizSession;
use crate::shuffle;
use crate::store::WordStore;

/// Indices of every entry with at least one recorded miss, most-missed
/// first. The sort is stable, so entries with equal counts keep their
/// relative storage order. Entries with a zero count are excluded.
pub fn ranked_entries(store: &WordStore) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..store.len())
        .filter(|&i| store.entry(i).error_count > 0)
        .collect();
    ranked.sort_by(|&a, &b| store.entry(b).error_count.cmp(&store.entry(a).error_count));
    ranked
}

/// Build a quiz session over exactly the ranked entries.
///
/// The listing above is sorted for display; the retest itself is asked in
/// shuffled order, which is what `seed` controls.
pub fn start_retest(store: &WordStore, seed: u64) -> Result<QuizSession> {
    let ranked = ranked_entries(store);
    let order: Vec<usize> = shuffle::permute(ranked.len(), seed)
        .into_iter()
        .map(|p| ranked[p])
        .collect();
    QuizSession::new(order)
}
