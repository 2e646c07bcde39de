//! Level 4: validator / fixer. Enforces monotonicity, duration sanity, and
//! the audio-duration bound over the fully assembled, ordered output list.

use crate::config::Thresholds;
use crate::model::{AlignedSegment, Method, MethodKind};

/// Single forward pass enforcing monotonicity and per-segment duration
/// sanity, followed by a whole-list scale-down pass if the final segment
/// still runs past `audio_duration_ms`.
pub fn validate(segments: Vec<AlignedSegment>, audio_duration_ms: i64, thresholds: &Thresholds) -> Vec<AlignedSegment> {
    let mut out: Vec<AlignedSegment> = Vec::with_capacity(segments.len());
    let mut fixed_count = 0usize;
    let mut fallback_count = 0usize;

    for segment in segments {
        let mut segment = segment;

        if let Some(prev) = out.last() {
            if segment.start_ms < prev.end_ms - thresholds.max_overlap_ms {
                let duration = segment.end_ms - segment.start_ms;
                let new_start = prev.end_ms;
                segment = AlignedSegment {
                    start_ms: new_start,
                    end_ms: new_start + duration,
                    confidence: segment.confidence * 0.9,
                    method: append_fixed(&segment.method),
                    ..segment
                };
                fixed_count += 1;
            }
        }

        let word_count = segment.word_count().max(1);
        let duration = segment.end_ms - segment.start_ms;
        let ms_per_word = duration as f64 / word_count as f64;

        if !(thresholds.min_ms_per_word as f64..=thresholds.max_ms_per_word as f64).contains(&ms_per_word) {
            let start = out.last().map(|p| p.end_ms + 50).unwrap_or(segment.start_ms);
            let end = start + 150 * word_count as i64;
            segment = AlignedSegment {
                start_ms: start,
                end_ms: end,
                confidence: 0.3,
                method: Method::new(MethodKind::DurationFallback).as_str(),
                ..segment
            };
            fallback_count += 1;
        }

        out.push(segment);
    }

    if fixed_count > 0 || fallback_count > 0 {
        log::warn!("validator applied {fixed_count} monotonicity fix(es), {fallback_count} duration fallback(s)");
    }

    if audio_duration_ms > 0 {
        if let Some(last) = out.last() {
            if last.end_ms > audio_duration_ms {
                let scale = audio_duration_ms as f64 / last.end_ms as f64;
                log::warn!("scaling all segments by {scale:.4} to fit audio duration {audio_duration_ms}ms");
                for segment in out.iter_mut() {
                    segment.start_ms = (segment.start_ms as f64 * scale).round() as i64;
                    segment.end_ms = (segment.end_ms as f64 * scale).round() as i64;
                    segment.confidence *= 0.8;
                    if !segment.method.ends_with("_scaled") {
                        segment.method = append_scaled(&segment.method);
                    }
                }
                if let Some(last) = out.last_mut() {
                    if last.end_ms > audio_duration_ms {
                        last.end_ms = audio_duration_ms;
                    }
                }
            }
        }
    }

    out
}

fn append_fixed(method: &str) -> String {
    format!("{method}_fixed")
}

fn append_scaled(method: &str) -> String {
    format!("{method}_scaled")
}
