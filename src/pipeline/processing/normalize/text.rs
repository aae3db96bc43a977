use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Anything that is neither a word character nor whitespace.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid non-word regex"));

/// Runs of consecutive whitespace.
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Canonicalize free text: fold accents, drop punctuation, collapse
/// whitespace, lowercase.
///
/// `None` and empty input map to the empty string (never null), so
/// downstream length and word counts are always well-defined. Applying the
/// function to its own output is a no-op.
pub fn clean_text(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(text) if !text.is_empty() => text,
        _ => return String::new(),
    };

    // NFKD splits accented characters into base + combining mark; dropping
    // the marks is the accent fold ("é" -> "e").
    let folded: String = raw.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = folded.to_lowercase();
    let spaced = NON_WORD.replace_all(&lowered, " ");
    WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
}
