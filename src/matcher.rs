//! Sliding-window search: given a text and a range of word indices, find
//! the best-scoring contiguous word span.

use crate::model::Word;
use crate::similarity::{partial_ratio, similarity};
use crate::text::normalize;

const EARLY_EXIT_SCORE: f64 = 0.95;
const PRE_FILTER_PARTIAL_RATIO: f64 = 0.35;

/// The best-scoring contiguous word span found for a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub start_idx: usize,
    pub end_idx: usize,
    pub start_ms: i64,
    pub end_ms: i64,
    pub confidence: f64,
}

/// Search `words[search_start..search_end]` for the contiguous span whose
/// joined text best matches `text`, trying window sizes around
/// `expected_word_count`.
///
/// Window sizes tried: the deduplicated, positive entries of
/// `{expected, expected-2, expected-1, expected+1, expected+2, floor(0.7*expected)}`,
/// each walked at ascending start indices; the first window to reach a
/// score `>= 0.95` short-circuits the search.
pub fn find_best_match(
    text: &str,
    words: &[Word],
    search_start: usize,
    search_end: usize,
    expected_word_count: usize,
) -> Option<MatchResult> {
    let search_end = search_end.min(words.len());
    if search_start >= search_end || normalize(text).is_empty() {
        return None;
    }

    let mut best: Option<(usize, usize, f64)> = None;

    'outer: for window_size in candidate_window_sizes(expected_word_count) {
        if window_size == 0 || window_size > search_end - search_start {
            continue;
        }
        for start in search_start..=(search_end - window_size) {
            let end = start + window_size;
            let window_text = join_words(&words[start..end]);

            let pre_filter = partial_ratio(&normalize(text), &normalize(&window_text));
            if pre_filter < PRE_FILTER_PARTIAL_RATIO {
                continue;
            }

            let score = similarity(text, &window_text);
            if best.is_none_or(|(_, _, best_score)| score > best_score) {
                best = Some((start, end, score));
            }
            if score >= EARLY_EXIT_SCORE {
                break 'outer;
            }
        }
    }

    best.map(|(start, end, confidence)| MatchResult {
        start_idx: start,
        end_idx: end,
        start_ms: (words[start].start_sec * 1000.0).round() as i64,
        end_ms: (words[end - 1].end_sec * 1000.0).round() as i64,
        confidence,
    })
}

fn join_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deduplicated, positive, specified-order candidate window sizes.
fn candidate_window_sizes(expected: usize) -> Vec<usize> {
    let expected_i = expected as i64;
    let raw = [
        expected_i,
        expected_i - 1,
        expected_i + 1,
        expected_i - 2,
        expected_i + 2,
        (0.7 * expected as f64).floor() as i64,
    ];

    let mut seen = std::collections::HashSet::new();
    let mut sizes = Vec::new();
    for v in raw {
        if v > 0 {
            let v = v as usize;
            if seen.insert(v) {
                sizes.push(v);
            }
        }
    }
    sizes
}
