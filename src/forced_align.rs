//! Seam to the upstream forced-alignment backend. `spec.md` §6 places the
//! speech model itself out of scope: this module is the trait boundary a
//! real backend (e.g. a wav2vec2/MFA wrapper) would implement, plus a
//! deterministic fake used by tests and the CLI demo.

use crate::error::AlignmentError;
use crate::model::Word;

/// Produces word-level timestamps for a chunk of audio. The core pipeline
/// never calls this directly — it consumes whatever `Vec<Word>` the caller
/// already has — but a full service wires one of these in front of it.
pub trait ForcedAligner {
    fn align(&self, audio: &[u8]) -> Result<Vec<Word>, AlignmentError>;
}

/// A deterministic stand-in that treats `audio` as whitespace-separated
/// ASCII text and assigns each token a fixed 0.3s slot. Useful for tests
/// and for exercising the CLI without a real speech model installed.
pub struct FakeAligner {
    pub seconds_per_word: f64,
}

impl Default for FakeAligner {
    fn default() -> Self {
        FakeAligner { seconds_per_word: 0.3 }
    }
}

impl ForcedAligner for FakeAligner {
    fn align(&self, audio: &[u8]) -> Result<Vec<Word>, AlignmentError> {
        let text = std::str::from_utf8(audio).map_err(|e| AlignmentError::UpstreamFailure(e.to_string()))?;
        let words: Vec<Word> = text
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| Word {
                text: token.to_string(),
                start_sec: index as f64 * self.seconds_per_word,
                end_sec: (index + 1) as f64 * self.seconds_per_word,
                index,
            })
            .collect();

        if words.is_empty() {
            return Err(AlignmentError::EmptyWords);
        }

        Ok(words)
    }
}
