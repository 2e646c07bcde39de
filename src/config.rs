//! Tunable thresholds. `spec.md` §9's Open Questions call for every magic
//! number in the pipeline to be exposed as configuration, defaulting to the
//! constants given in the spec; this is that configuration.

use crate::error::AlignmentError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum whitespace-token count for a segment to be eligible as an anchor.
    pub anchor_min_words: usize,
    /// Maximum whitespace-token count for a segment to be eligible as an anchor.
    pub anchor_max_words: usize,
    /// Minimum [`crate::similarity::similarity`] score for a match to become an anchor.
    pub anchor_min_confidence: f64,
    /// Minimum score for a Level 3 match to be accepted instead of interpolated.
    pub min_segment_confidence: f64,
    /// Seconds each side of a segment's own time range searched for its anchor.
    pub time_window_seconds: f64,
    /// Minimum extra words of search slack added to a region aligner's search window.
    pub min_search_buffer: usize,
    /// Overlap tolerated between consecutive segments before the monotonicity fix fires.
    pub max_overlap_ms: i64,
    /// Lower bound on milliseconds-per-word before the duration-sanity fallback fires.
    pub min_ms_per_word: i64,
    /// Upper bound on milliseconds-per-word before the duration-sanity fallback fires.
    pub max_ms_per_word: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            anchor_min_words: 2,
            anchor_max_words: 20,
            anchor_min_confidence: 0.75,
            min_segment_confidence: 0.40,
            time_window_seconds: 30.0,
            min_search_buffer: 50,
            max_overlap_ms: 2000,
            min_ms_per_word: 20,
            max_ms_per_word: 800,
        }
    }
}

impl Thresholds {
    /// Load thresholds from a JSON file, the same `serde_json::from_str`
    /// pattern the teacher's `config::load_config` uses for its own config.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AlignmentError> {
        let data = fs::read_to_string(path)?;
        let thresholds: Thresholds = serde_json::from_str(&data)?;
        Ok(thresholds)
    }
}
