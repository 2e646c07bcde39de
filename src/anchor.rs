//! Level 1: anchor finder. Identifies high-confidence segment <-> word-span
//! matches inside time-bounded windows, in segment order, honoring
//! monotonicity so later segments can never claim word indices already
//! consumed by an earlier anchor.

use crate::config::Thresholds;
use crate::matcher::find_best_match;
use crate::model::{Anchor, Segment, Word};

/// Find anchors for `segments` against `words`, in input order.
///
/// The returned list is strictly increasing in `segment_index` and
/// non-decreasing in `word_end_index` (P8).
pub fn find_anchors(segments: &[Segment], words: &[Word], audio_duration_ms: i64, thresholds: &Thresholds) -> Vec<Anchor> {
    let mut anchors = Vec::new();
    let mut last_anchor_word_end = 0usize;

    for segment in segments {
        let word_count = segment.word_count();
        if word_count < thresholds.anchor_min_words || word_count > thresholds.anchor_max_words {
            continue;
        }

        let window_start_ms = (segment.start_ms - (thresholds.time_window_seconds * 1000.0) as i64)
            .clamp(0, audio_duration_ms.max(0));
        let window_end_ms = (segment.end_ms + (thresholds.time_window_seconds * 1000.0) as i64)
            .clamp(0, audio_duration_ms.max(0));

        let word_start_from_time = find_word_at_time(words, window_start_ms as f64 / 1000.0);
        let word_end_from_time = find_word_at_time(words, window_end_ms as f64 / 1000.0);

        let word_start = word_start_from_time.max(last_anchor_word_end);
        let mut word_end = (word_end_from_time + 1).max(word_start);

        if word_end.saturating_sub(word_start) < word_count + 10 {
            word_end = (word_start + word_count + 20).min(words.len());
        }

        let Some(result) = find_best_match(&segment.text, words, word_start, word_end, word_count) else {
            continue;
        };

        if result.confidence >= thresholds.anchor_min_confidence {
            log::info!(
                "anchor found: segment {} -> words [{}, {}) confidence {:.3}",
                segment.index,
                result.start_idx,
                result.end_idx,
                result.confidence
            );
            last_anchor_word_end = result.end_idx;
            anchors.push(Anchor {
                segment_index: segment.index,
                word_start_index: result.start_idx,
                word_end_index: result.end_idx,
                confidence: result.confidence,
                start_ms: result.start_ms,
                end_ms: result.end_ms,
            });
        }
    }

    anchors
}

/// The largest word index whose `start_sec <= t`, clamped to
/// `[0, len(words)-1]`. Equivalently, one less than the first word whose
/// `start_sec >= t`.
pub fn find_word_at_time(words: &[Word], t: f64) -> usize {
    if words.is_empty() {
        return 0;
    }
    let idx = words.partition_point(|w| w.start_sec <= t);
    idx.saturating_sub(1).min(words.len() - 1)
}
