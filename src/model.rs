//! Core data types shared by every level of the alignment pipeline.
//!
//! Everything here is immutable after construction: a correction is always
//! expressed by building a new record, never by mutating one in place.

use serde::{Deserialize, Serialize};

/// One timestamped token produced by the forced-alignment backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub start_sec: f64,
    pub end_sec: f64,
    pub index: usize,
}

/// One speaker-labeled segment from the source transcript, as produced by
/// the upstream LLM. Its timestamps are assumed unreliable; its text and
/// speaker label are never modified by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub speaker_id: String,
    pub text: String,
    pub start_ms: i64,
    pub end_ms: i64,
    pub index: usize,
}

impl Segment {
    /// Whitespace token count of `text`, used throughout the pipeline as the
    /// segment's "expected word count".
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A segment whose match to a word span cleared the anchor confidence
/// threshold; used as a fixed reference point by the region segmenter.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub segment_index: usize,
    pub word_start_index: usize,
    pub word_end_index: usize,
    pub confidence: f64,
    pub start_ms: i64,
    pub end_ms: i64,
}

/// A contiguous run of non-anchor segments bounded by two anchors (or a
/// transcript edge), together with the word-index and time window those
/// segments must be matched within.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub start_segment_index: usize,
    pub end_segment_index: usize,
    pub word_start_index: usize,
    pub word_end_index: usize,
    pub time_start_ms: i64,
    pub time_end_ms: i64,
}

impl Region {
    pub fn segment_count(&self) -> usize {
        self.end_segment_index + 1 - self.start_segment_index
    }
}

/// How an [`AlignedSegment`]'s timing was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Anchor,
    Aligned,
    Interpolated,
    Original,
    DurationFallback,
}

impl MethodKind {
    fn base_str(self) -> &'static str {
        match self {
            MethodKind::Anchor => "anchor",
            MethodKind::Aligned => "aligned",
            MethodKind::Interpolated => "interpolated",
            MethodKind::Original => "original",
            MethodKind::DurationFallback => "duration_fallback",
        }
    }
}

/// The `method` discriminant, as a base kind plus the two orthogonal
/// corrections the validator may apply. Rendered as `spec.md`'s
/// `{base}[_fixed][_scaled]` string via [`Method::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method {
    pub kind: MethodKind,
    pub fixed: bool,
    pub scaled: bool,
}

impl Method {
    pub fn new(kind: MethodKind) -> Self {
        Method {
            kind,
            fixed: false,
            scaled: false,
        }
    }

    pub fn with_fixed(self) -> Self {
        Method {
            fixed: true,
            ..self
        }
    }

    pub fn with_scaled(self) -> Self {
        Method {
            scaled: true,
            ..self
        }
    }

    pub fn as_str(&self) -> String {
        let mut s = self.kind.base_str().to_string();
        if self.fixed {
            s.push_str("_fixed");
        }
        if self.scaled {
            s.push_str("_scaled");
        }
        s
    }
}

/// One output segment: same speaker/text as the corresponding input
/// segment, corrected timing, and a confidence/method pair explaining how
/// the timing was derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSegment {
    pub speaker_id: String,
    pub text: String,
    pub start_ms: i64,
    pub end_ms: i64,
    pub confidence: f64,
    /// Rendered `method` string, e.g. `"aligned"`, `"interpolated_fixed"`.
    ///
    /// A confidence of 0.8+ is a good match; below 0.5 suggests the segment
    /// text may not actually be present in the audio. These bands are
    /// advisory only — callers should branch on `method`, not on arbitrary
    /// confidence cutoffs.
    pub method: String,
}

impl AlignedSegment {
    pub fn from_segment(segment: &Segment, start_ms: i64, end_ms: i64, confidence: f64, method: Method) -> Self {
        AlignedSegment {
            speaker_id: segment.speaker_id.clone(),
            text: segment.text.clone(),
            start_ms,
            end_ms,
            confidence,
            method: method.as_str(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
