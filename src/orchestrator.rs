//! Orchestrator: composes the four levels, assembles the ordered output,
//! and computes summary statistics.

use crate::anchor::find_anchors;
use crate::config::Thresholds;
use crate::model::{AlignedSegment, Anchor, Method, MethodKind, Segment, Word};
use crate::region::segment_regions;
use crate::regional::{align_region, RegionalOutput};
use crate::validate::validate;

/// `align_transcript`'s return value: the aligned segments plus the
/// arithmetic mean of their confidences, matching the response shape of
/// the (out-of-scope) HTTP surface.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentSummary {
    pub segments: Vec<AlignedSegment>,
    pub average_confidence: f64,
}

/// Reproject `segments`' timing onto `words`, using the default
/// [`Thresholds`]. See [`align_transcript_with`] to override thresholds.
pub fn align_transcript(segments: &[Segment], words: &[Word]) -> AlignmentSummary {
    align_transcript_with(segments, words, &Thresholds::default())
}

/// Same as [`align_transcript`], with explicit [`Thresholds`].
///
/// Zero segments is not an error: returns an empty summary. Zero words is
/// the caller's responsibility to have already rejected (per `spec.md`
/// §6/§7, a forced aligner returning no words is a fatal upstream error,
/// not something this function silently tolerates) — called with an empty
/// `words` slice, this function also returns an empty summary, matching
/// the "zero segments or empty text" branch of the orchestrator spec.
pub fn align_transcript_with(segments: &[Segment], words: &[Word], thresholds: &Thresholds) -> AlignmentSummary {
    if segments.is_empty() || words.is_empty() {
        return AlignmentSummary {
            segments: Vec::new(),
            average_confidence: 0.0,
        };
    }

    let audio_duration_ms = (words[words.len() - 1].end_sec * 1000.0).round() as i64;

    let anchors = find_anchors(segments, words, audio_duration_ms, thresholds);
    let regions = segment_regions(segments, &anchors, words.len(), audio_duration_ms);

    log::info!(
        "alignment: {} segments, {} words, {} anchors, {} regions",
        segments.len(),
        words.len(),
        anchors.len(),
        regions.len()
    );

    let regional_outputs: Vec<RegionalOutput> = regions.iter().flat_map(|region| align_region(region, segments, words, thresholds)).collect();

    let filled = fill_slots(segments, &anchors, &regional_outputs);

    let validated = validate(filled, audio_duration_ms, thresholds);

    let average_confidence = if validated.is_empty() {
        0.0
    } else {
        validated.iter().map(|s| s.confidence).sum::<f64>() / validated.len() as f64
    };

    AlignmentSummary {
        segments: validated,
        average_confidence,
    }
}

/// Place anchors and regional outputs into one slot per segment, in
/// `segments` order. `anchors` and `regional_outputs` are expected to
/// cover every segment index exactly once between them (anchor finder and
/// region segmenter/aligner jointly guarantee this); any index neither
/// covers falls back to the segment's own unverified timing, flagged
/// `original`, so a coverage bug degrades output instead of panicking.
fn fill_slots(segments: &[Segment], anchors: &[Anchor], regional_outputs: &[RegionalOutput]) -> Vec<AlignedSegment> {
    let mut slots: Vec<Option<AlignedSegment>> = vec![None; segments.len()];

    for anchor in anchors {
        slots[anchor.segment_index] = Some(AlignedSegment::from_segment(
            &segments[anchor.segment_index],
            anchor.start_ms,
            anchor.end_ms,
            anchor.confidence,
            Method::new(MethodKind::Anchor),
        ));
    }

    for output in regional_outputs {
        if slots[output.segment_index].is_none() {
            slots[output.segment_index] = Some(output.aligned.clone());
        }
    }

    slots
        .into_iter()
        .zip(segments.iter())
        .map(|(slot, segment)| {
            slot.unwrap_or_else(|| {
                log::warn!("segment {} reached the safety net; this should not happen", segment.index);
                AlignedSegment::from_segment(segment, segment.start_ms, segment.end_ms, 0.0, Method::new(MethodKind::Original))
            })
        })
        .collect()
}
