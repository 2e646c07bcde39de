//! End-to-end property and scenario coverage for the full alignment
//! pipeline, exercised through the public `align_transcript` entry point
//! rather than any single level in isolation.

use hardy_align::{align_transcript, Segment, Word};

fn word(text: &str, start: f64, end: f64, index: usize) -> Word {
    Word {
        text: text.to_string(),
        start_sec: start,
        end_sec: end,
        index,
    }
}

fn segment(speaker: &str, text: &str, start_ms: i64, end_ms: i64, index: usize) -> Segment {
    Segment {
        speaker_id: speaker.to_string(),
        text: text.to_string(),
        start_ms,
        end_ms,
        index,
    }
}

/// P1: output length always equals input segment count.
#[test]
fn output_length_matches_input() {
    let words: Vec<Word> = (0..30).map(|i| word(&format!("w{i}"), i as f64 * 0.4, i as f64 * 0.4 + 0.35, i)).collect();
    let segments = vec![
        segment("A", "w0 w1 w2", 0, 1200, 0),
        segment("B", "unrelated filler text here", 1200, 2400, 1),
        segment("A", "w10 w11 w12 w13", 2400, 3600, 2),
    ];
    let result = align_transcript(&segments, &words);
    assert_eq!(result.segments.len(), segments.len());
}

/// P2: speaker_id and text are passed through unchanged.
#[test]
fn speaker_and_text_are_preserved() {
    let words: Vec<Word> = (0..10).map(|i| word(&format!("w{i}"), i as f64 * 0.3, i as f64 * 0.3 + 0.25, i)).collect();
    let segments = vec![segment("speaker-7", "w0 w1 w2", 0, 900, 0)];
    let result = align_transcript(&segments, &words);
    assert_eq!(result.segments[0].speaker_id, "speaker-7");
    assert_eq!(result.segments[0].text, "w0 w1 w2");
}

/// P3: every output segment carries a non-negative duration.
#[test]
fn durations_are_never_negative() {
    let words: Vec<Word> = (0..50).map(|i| word(&format!("w{i}"), i as f64 * 0.2, i as f64 * 0.2 + 0.18, i)).collect();
    let mut segments = Vec::new();
    for i in 0..12 {
        let text = if i % 3 == 0 { format!("w{} w{} w{}", i * 3, i * 3 + 1, i * 3 + 2) } else { "completely unrelated noise text".to_string() };
        segments.push(segment("A", &text, i as i64 * 800, i as i64 * 800 + 700, i));
    }
    let result = align_transcript(&segments, &words);
    for seg in &result.segments {
        assert!(seg.end_ms >= seg.start_ms, "negative duration: {seg:?}");
    }
}

/// P4: confidence is always within [0, 1].
#[test]
fn confidence_is_bounded() {
    let words: Vec<Word> = (0..20).map(|i| word(&format!("w{i}"), i as f64 * 0.3, i as f64 * 0.3 + 0.25, i)).collect();
    let segments = vec![
        segment("A", "w0 w1 w2 w3", 0, 1200, 0),
        segment("B", "gibberish nonsense words here", 1200, 2400, 1),
    ];
    let result = align_transcript(&segments, &words);
    for seg in &result.segments {
        assert!((0.0..=1.0).contains(&seg.confidence), "out of range: {}", seg.confidence);
    }
    assert!((0.0..=1.0).contains(&result.average_confidence));
}

/// P5: output end times never exceed the audio duration implied by the
/// last word's end timestamp.
#[test]
fn end_times_never_exceed_audio_duration() {
    let words = vec![word("only", 0.0, 5.0, 0)];
    let segments = vec![segment("A", "only word here plus extra", 0, 120_000, 0)];
    let result = align_transcript(&segments, &words);
    for seg in &result.segments {
        assert!(seg.end_ms <= 5000, "end_ms {} exceeds audio duration", seg.end_ms);
    }
}

/// P6: an empty segment list yields an empty, zero-confidence summary.
#[test]
fn empty_segments_yields_empty_summary() {
    let words = vec![word("hi", 0.0, 0.5, 0)];
    let result = align_transcript(&[], &words);
    assert!(result.segments.is_empty());
    assert_eq!(result.average_confidence, 0.0);
}

/// P9: regions never overlap and together with anchors cover every
/// segment exactly once — verified indirectly here by checking that the
/// full pipeline assigns every segment some method and no method repeats
/// a segment_index (each output row corresponds 1:1 with an input row by
/// construction of the slot array, so this is really a non-panic check
/// against a structure large enough to produce multiple regions).
#[test]
fn mixed_anchors_and_regions_cover_every_segment() {
    let words: Vec<Word> = (0..200).map(|i| word(&format!("tok{i}"), i as f64 * 0.25, i as f64 * 0.25 + 0.2, i)).collect();

    let mut segments = Vec::new();
    segments.push(segment("A", "tok0 tok1 tok2 tok3", 0, 1000, 0));
    for i in 1..15 {
        segments.push(segment("B", &format!("filler chat number {i}"), i as i64 * 1000, i as i64 * 1000 + 900, i));
    }
    segments.push(segment("A", "tok90 tok91 tok92 tok93", 15_000, 16_000, 15));
    for i in 16..25 {
        segments.push(segment("B", &format!("more filler words {i}"), i as i64 * 1000, i as i64 * 1000 + 900, i));
    }
    segments.push(segment("A", "tok190 tok191 tok192 tok193", 25_000, 26_000, 25));

    let result = align_transcript(&segments, &words);
    assert_eq!(result.segments.len(), segments.len());
    for method in result.segments.iter().map(|s| &s.method) {
        assert!(!method.is_empty());
    }
}

#[test]
fn scenario_single_perfect_match() {
    let words = vec![word("hello", 0.0, 0.5, 0), word("world", 0.5, 1.0, 1)];
    let segments = vec![segment("A", "hello world", 0, 9999, 0)];
    let result = align_transcript(&segments, &words);
    assert_eq!(result.segments[0].start_ms, 0);
    assert_eq!(result.segments[0].end_ms, 1000);
    assert_eq!(result.segments[0].method, "anchor");
}

#[test]
fn scenario_empty_transcript() {
    let words = vec![word("hello", 0.0, 0.5, 0)];
    let result = align_transcript(&[], &words);
    assert!(result.segments.is_empty());
    assert_eq!(result.average_confidence, 0.0);
}

#[test]
fn scenario_low_confidence_text_still_gets_bounded_output() {
    let words = vec![word("alpha", 0.0, 0.5, 0), word("beta", 0.5, 1.0, 1)];
    let segments = vec![segment("A", "completely different phrase", 0, 1000, 0)];
    let result = align_transcript(&segments, &words);
    assert_eq!(result.segments.len(), 1);
    assert!(result.segments[0].end_ms <= 1000);
}

#[test]
fn scenario_overflowing_segment_is_clamped_to_audio_duration() {
    let words = vec![word("hi", 0.0, 10.0, 0)];
    let segments = vec![segment("A", "hi there friend", 0, 60_000, 0)];
    let result = align_transcript(&segments, &words);
    assert!(result.segments[0].end_ms <= 10_000);
}

#[test]
fn scenario_out_of_order_segment_text_is_corrected_for_monotonicity() {
    let words: Vec<Word> = (0..40).map(|i| word(&format!("token{i}"), i as f64, i as f64 + 0.9, i)).collect();
    let segments = vec![
        segment("A", "token30 token31 token32 token33", 30_000, 34_000, 0),
        segment("A", "token0 token1 token2 token3", 0, 4_000, 1),
    ];
    let result = align_transcript(&segments, &words);
    assert!(result.segments[1].start_ms >= result.segments[0].end_ms - 2000);
}

#[test]
fn scenario_long_transcript_with_gap_regions_stays_monotonic() {
    let words: Vec<Word> = (0..100).map(|i| word(&format!("tok{i}"), i as f64 * 0.3, i as f64 * 0.3 + 0.25, i)).collect();

    let mut segments = Vec::new();
    segments.push(segment("A", "tok0 tok1 tok2 tok3", 0, 1200, 0));
    for i in 1..9 {
        segments.push(segment("A", &format!("filler segment number {i}"), i as i64 * 1000, i as i64 * 1000 + 900, i));
    }
    segments.push(segment("A", "tok96 tok97 tok98 tok99", 9000, 10_200, 9));

    let result = align_transcript(&segments, &words);
    assert_eq!(result.segments.len(), 10);
    for pair in result.segments.windows(2) {
        assert!(pair[1].start_ms >= pair[0].end_ms - 2000);
    }
}
