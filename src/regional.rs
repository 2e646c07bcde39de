//! Level 3: regional aligner. Matches every non-anchor segment inside its
//! region, interpolating proportionally over the region's time budget when
//! direct matching fails.

use crate::config::Thresholds;
use crate::matcher::find_best_match;
use crate::model::{AlignedSegment, Method, MethodKind, Region, Segment, Word};

const MIN_INTERPOLATED_DURATION_MS: i64 = 50;

/// One aligned output, tagged with the global segment index it belongs at.
pub struct RegionalOutput {
    pub segment_index: usize,
    pub aligned: AlignedSegment,
}

/// Align every segment in `region`, in order, maintaining a moving search
/// cursor. Never advances the cursor on the interpolated branch: a failed
/// match carries no reliable information about where the next segment
/// starts.
pub fn align_region(region: &Region, segments: &[Segment], words: &[Word], thresholds: &Thresholds) -> Vec<RegionalOutput> {
    let region_segments = &segments[region.start_segment_index..=region.end_segment_index];
    let total_words: usize = region_segments.iter().map(|s| s.word_count()).sum();

    let mut current_word_idx = region.word_start_index;
    let mut words_before = 0usize;
    let mut outputs = Vec::with_capacity(region_segments.len());

    for (i, segment) in region_segments.iter().enumerate() {
        let expected = segment.word_count();

        let search_start = region.word_start_index.max(current_word_idx.saturating_sub(5));
        let search_end = (region.word_end_index + 1).min(current_word_idx + 3 * expected + thresholds.min_search_buffer);

        let candidate = find_best_match(&segment.text, words, search_start, search_end, expected);

        let aligned = if let Some(m) = &candidate {
            if m.confidence >= thresholds.min_segment_confidence {
                current_word_idx = m.end_idx;
                Some(AlignedSegment::from_segment(
                    segment,
                    m.start_ms,
                    m.end_ms,
                    m.confidence,
                    Method::new(MethodKind::Aligned),
                ))
            } else {
                None
            }
        } else {
            None
        };

        let aligned = aligned.unwrap_or_else(|| {
            interpolate(
                region,
                segment,
                i,
                region_segments.len(),
                words_before,
                expected,
                total_words,
                candidate.as_ref().map(|m| m.confidence).unwrap_or(0.0),
            )
        });

        words_before += expected;
        outputs.push(RegionalOutput {
            segment_index: segment.index,
            aligned,
        });
    }

    outputs
}

#[allow(clippy::too_many_arguments)]
fn interpolate(
    region: &Region,
    segment: &Segment,
    position_in_region: usize,
    region_segment_count: usize,
    words_before: usize,
    words_self: usize,
    total_words: usize,
    confidence: f64,
) -> AlignedSegment {
    let (start_ratio, end_ratio) = if total_words > 0 {
        (
            words_before as f64 / total_words as f64,
            (words_before + words_self) as f64 / total_words as f64,
        )
    } else {
        (
            position_in_region as f64 / region_segment_count as f64,
            (position_in_region + 1) as f64 / region_segment_count as f64,
        )
    };

    let duration = region.time_end_ms - region.time_start_ms;
    let interp_start = region.time_start_ms + (start_ratio * duration as f64).round() as i64;
    let interp_end = (region.time_start_ms + (end_ratio * duration as f64).round() as i64).min(region.time_end_ms);
    let interp_start = interp_start.min(interp_end - MIN_INTERPOLATED_DURATION_MS);

    AlignedSegment::from_segment(segment, interp_start, interp_end, confidence, Method::new(MethodKind::Interpolated))
}
