//! Text canonicalization used by every similarity comparison in the crate.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// `[:alnum:]` in this crate is ASCII-only; `\p{L}`/`\p{N}` keep the match
// Unicode-aware so accented/non-Latin alphanumerics survive, matching
// `char::is_alphanumeric`'s definition without pulling underscore in the
// way `\w` does.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]").unwrap());

/// Unicode-fold (NFKD, combining marks stripped so accents drop cleanly),
/// lowercase, strip everything that isn't alphanumeric or whitespace, and
/// collapse whitespace runs to single spaces with outer whitespace
/// trimmed.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    let folded: String = s.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = folded.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, " ");

    stripped.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Contiguous length-`n` character-substrings of `normalize(s)`.
///
/// If the normalized string is shorter than `n` (but non-empty) the set
/// contains just the normalized string itself. An empty normalized string
/// yields the empty set.
pub fn ngrams(s: &str, n: usize) -> HashSet<String> {
    let normalized = normalize(s);
    let chars: Vec<char> = normalized.chars().collect();

    let mut set = HashSet::new();
    if chars.is_empty() || n == 0 {
        return set;
    }
    if chars.len() < n {
        set.insert(normalized);
        return set;
    }
    for i in 0..=chars.len() - n {
        set.insert(chars[i..i + n].iter().collect());
    }
    set
}
