//! Question Sampler — stratified random selection from a category-tagged bank.
//!
//! Algorithm:
//! 1. De-duplicate the bank by id (first occurrence wins)
//! 2. Partition by category, shuffle each partition, take up to `per_category_cap`
//! 3. If the capped picks cannot reach `min(n, bank)`, top up from shuffled leftovers
//! 4. Shuffle the combined picks and truncate to `n`
//!
//! The random source is a parameter so callers can seed it.

use std::collections::{BTreeMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::quiz::{Question, TraitCategory};

/// Returns `min(n, unique bank size)` questions with unique ids, in random order.
/// An empty bank yields an empty sequence.
pub fn sample<R: Rng + ?Sized>(
    bank: &[Question],
    n: usize,
    per_category_cap: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut seen = HashSet::new();
    let mut by_category: BTreeMap<TraitCategory, Vec<&Question>> = BTreeMap::new();
    for question in bank {
        if seen.insert(question.id.as_str()) {
            by_category.entry(question.category).or_default().push(question);
        }
    }

    let target = n.min(seen.len());
    let mut picks: Vec<&Question> = Vec::with_capacity(target);
    let mut leftovers: Vec<&Question> = Vec::new();

    for questions in by_category.values_mut() {
        questions.shuffle(rng);
        let take = per_category_cap.min(questions.len());
        picks.extend_from_slice(&questions[..take]);
        leftovers.extend_from_slice(&questions[take..]);
    }

    if picks.len() < target {
        leftovers.shuffle(rng);
        let missing = target - picks.len();
        picks.extend(leftovers.into_iter().take(missing));
    }

    picks.shuffle(rng);
    picks.truncate(target);
    picks.into_iter().cloned().collect()
}
