use itertools::Itertools;

use crate::Dictionary;

/// Candidates further away than this are never suggested.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// At most this many suggestions are returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Suggest replacements for a misspelled word, closest first.
///
/// The candidate pool is every dictionary key sharing the query's first
/// character - a coarse filter that keeps recall high without scanning
/// the whole vocabulary. Candidates within `MAX_EDIT_DISTANCE` are
/// sorted by distance (ties keep enumeration order) and truncated to
/// `MAX_SUGGESTIONS`.
///
/// The query is lowercased once up front: dictionary keys are all
/// lowercase, so a capitalized query would otherwise pool nothing.
pub fn suggest(word: &str, dictionary: &Dictionary) -> Vec<String> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return vec![];
    }
    if dictionary.contains(&word) {
        return vec![];
    }
    let first_char = match word.chars().next() {
        None => return vec![],
        Some(c) => c.to_string(),
    };
    dictionary
        .words_with_prefix(&first_char)
        .filter_map(|candidate| {
            let distance = edit_distance(&word, candidate);
            (distance <= MAX_EDIT_DISTANCE).then_some((distance, candidate))
        })
        .sorted_by_key(|&(distance, _)| distance)
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

/// Levenshtein distance: minimum number of single-character insertions,
/// deletions and substitutions turning `a` into `b`. Classic
/// dynamic-programming table, kept to two rows.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, char_a) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, char_b) in b.iter().enumerate() {
            let substitution_cost = if char_a == char_b { 0 } else { 1 };
            current[j + 1] = (previous[j] + substitution_cost)
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
