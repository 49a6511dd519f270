//! The address rewrite pipeline.
//!
//! `normalize` runs a fixed sequence of cleanup passes (newline-artifact
//! repair, throwaway phrases, hash-mark resolution, fraction protection,
//! punctuation stripping) and then a word-level rewrite driven by the lookup
//! tables (directional casing, positional suffix spelling, duplicate
//! designator collapse, final capitalization). Stage order matters: later
//! stages assume the cleanup the earlier ones performed.
//!
//! The function never fails for string input. Blank input comes back
//! unchanged, and input that cleanup reduces to nothing comes back as the
//! original string rather than an empty one.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::case::title_case;
use crate::tables::LookupTables;

// A "/n" with optional surrounding spaces joins its non-space neighbors.
static SLASH_N_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S*)\s*/\s*n\s*(\S*)").expect("hard-coded regex"));
// Leftover "/n" at either end of the string.
static SLASH_N_EDGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^/\s*n\s*)|(\s*/\s*n\s*$)").expect("hard-coded regex"));
// "/n" after a non-digit; the digit guard keeps fractions like 3/4 intact.
static SLASH_N_AFTER_NONDIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<pre>^|[^0-9])/\s*n\b").expect("hard-coded regex"));
// A slash floating between spaces, not bridging digits.
static DANGLING_SLASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<pre>^|[^0-9])(?P<a>\s)/(?P<b>\s+)(?P<post>[^0-9]|$)")
        .expect("hard-coded regex")
});
static SEE_MAILING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"See\s+[Mm]ailing(?:\s+[Aa]ddress)?").expect("hard-coded regex"));
static UNLISTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bunlisted\b").expect("hard-coded regex"));
static LETTER_THEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z])(\d+)").expect("hard-coded regex"));
// One link of a digit/slash chain like "25/1/2".
static SLASH_CHAIN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)/(\d+/)").expect("hard-coded regex"));
// A numeric fraction, optionally ordinal ("1/2", "1/3rd").
static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+/\d+(?:st|nd|rd|th)?\b").expect("hard-coded regex"));
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("hard-coded regex"));
static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:st|nd|rd|th)$").expect("hard-coded regex"));

static SHARED: LazyLock<AddressNormalizer> = LazyLock::new(AddressNormalizer::new);

/// Normalizes one address with the process-wide shared tables.
#[must_use]
pub fn normalize_address(address: &str) -> String {
    SHARED.normalize(address)
}

/// Owns the lookup tables and the rewrite pipeline.
///
/// Construction builds the tables once; `normalize` keeps no state between
/// calls, so one instance can be shared freely across threads.
#[derive(Debug, Default)]
pub struct AddressNormalizer {
    tables: LookupTables,
}

impl AddressNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: LookupTables::new(),
        }
    }

    /// The lookup tables behind this normalizer, for listings.
    #[must_use]
    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Normalizes one free-text US mailing address.
    #[must_use]
    pub fn normalize(&self, address: &str) -> String {
        if address.trim().is_empty() {
            return address.to_string();
        }

        let mut cleaned = repair_newline_artifacts(address);
        cleaned = strip_throwaway_phrases(&cleaned);
        cleaned = split_letters_from_digits(&cleaned);
        cleaned = split_slash_chains(&cleaned);
        cleaned = self.resolve_hash_marks(&cleaned);

        let (protected, fractions) = protect_fractions(&cleaned);
        cleaned = protected.replace('-', " ");
        cleaned = PUNCTUATION.replace_all(&cleaned, "").trim().to_string();
        cleaned = restore_fractions(&cleaned, &fractions);

        if cleaned.is_empty() {
            debug!("cleanup removed every token, returning input unchanged");
            return address.to_string();
        }

        let words = contract_diagonals(&cleaned);
        let rewritten = self.rewrite_words(&words);
        let deduped = self.collapse_repeat_designators(rewritten);
        self.finalize_capitalization(&deduped)
    }

    /// Resolves `#` token by token: dropped when a neighboring word already
    /// names the occupancy type, otherwise the first `#` in the token
    /// becomes the keyword "Unit ". Tokens emptied by the removal are
    /// discarded.
    fn resolve_hash_marks(&self, text: &str) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut transformed: Vec<String> = Vec::with_capacity(words.len());
        for (i, token) in words.iter().enumerate() {
            if !token.contains('#') {
                transformed.push((*token).to_string());
                continue;
            }
            let left_ignore = i > 0 && self.tables.is_unit_designator(words[i - 1]);
            let right_ignore =
                i + 1 < words.len() && self.tables.is_unit_designator(words[i + 1]);
            if left_ignore || right_ignore {
                let no_hash = token.replace('#', "");
                let no_hash = no_hash.trim();
                if !no_hash.is_empty() {
                    transformed.push(no_hash.to_string());
                }
            } else {
                transformed.push(token.replacen('#', "Unit ", 1).trim().to_string());
            }
        }
        transformed.join(" ")
    }

    /// The positional suffix/directional/designator rewrite.
    ///
    /// Classifications overlap: a word can be a designator and occupy a
    /// suffix position at the same time ("Apt"). Directionals win over
    /// suffix handling, designators pass through as written, and only the
    /// word at the highest suffix position is abbreviated; every suffix
    /// word before it renders full-form.
    fn rewrite_words(&self, words: &[String]) -> Vec<String> {
        let last_suffix = words
            .iter()
            .enumerate()
            .filter(|(_, word)| self.tables.is_suffix(word))
            .map(|(i, _)| i)
            .last();

        let mut rewritten = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if self.tables.is_directional(word) {
                rewritten.push(word.to_uppercase());
            } else if self.tables.is_unit_designator(word) {
                rewritten.push(word.clone());
            } else if self.tables.is_suffix(word) {
                if last_suffix == Some(i) {
                    match self.tables.abbreviate(word) {
                        Some(abbr) => rewritten.push(abbr.to_string()),
                        None => rewritten.push(word.clone()),
                    }
                } else if let Some(full) = self.tables.expand(word) {
                    rewritten.push(full.to_string());
                } else {
                    rewritten.push(title_case(word));
                }
            } else {
                rewritten.push(word.clone());
            }
        }
        rewritten
    }

    /// Drops a unit designator that already appeared earlier in the address
    /// ("Unit Unit 5" came in from duplicated data entry upstream).
    fn collapse_repeat_designators(&self, words: Vec<String>) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept = Vec::with_capacity(words.len());
        for word in words {
            if self.tables.is_unit_designator(&word) && !seen.insert(title_case(&word)) {
                continue;
            }
            kept.push(word);
        }
        kept
    }

    fn finalize_capitalization(&self, words: &[String]) -> String {
        let cased: Vec<String> = words
            .iter()
            .map(|word| {
                let lower = word.to_lowercase();
                if ORDINAL.is_match(&lower) {
                    lower
                } else if self.tables.is_directional(word) {
                    word.to_uppercase()
                } else {
                    title_case(word)
                }
            })
            .collect();
        cased.join(" ")
    }
}

/// Removes stray "/n" fragments left behind by corrupted newline encoding,
/// along with literal `\n` text and real newline characters.
fn repair_newline_artifacts(address: &str) -> String {
    let cleaned = SLASH_N_INLINE.replace_all(address, "$1 $2");
    let cleaned = SLASH_N_EDGES.replace_all(&cleaned, " ");
    let cleaned = SLASH_N_AFTER_NONDIGIT.replace_all(&cleaned, "${pre} ");
    let cleaned = DANGLING_SLASH.replace_all(&cleaned, "${pre}${a}${b}${post}");
    cleaned.replace("\\n", " ").replace('\n', " ").trim().to_string()
}

fn strip_throwaway_phrases(address: &str) -> String {
    let cleaned = SEE_MAILING.replace_all(address, "");
    let cleaned = cleaned.trim();
    UNLISTED.replace_all(cleaned, "").trim().to_string()
}

/// "Center25" -> "Center 25"; concatenations from OCR or sloppy exports.
fn split_letters_from_digits(address: &str) -> String {
    LETTER_THEN_DIGITS.replace_all(address, "$1 $2").into_owned()
}

/// Rewrites digit/slash chains ("25/1/2") as whole number plus fraction
/// ("25 1/2"), keeping only the final slash. Applied to a fixed point so
/// longer chains resolve left to right.
fn split_slash_chains(address: &str) -> String {
    let mut current = address.to_string();
    loop {
        let next = SLASH_CHAIN_LINK.replace_all(&current, "$1 $2").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Replaces each numeric fraction with a unique placeholder token so the
/// punctuation pass cannot damage it. Returns the rewritten string and the
/// placeholder/fraction pairs for later restoration.
///
/// A candidate followed by another slash is not a fraction; the scan then
/// resumes just past the candidate's own slash, so the tail of a chain
/// ("2/3" in "1/2/3") is still found.
fn protect_fractions(text: &str) -> (String, Vec<(String, String)>) {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0;
    while let Some(found) = FRACTION.find_at(text, pos) {
        if text[found.end()..].starts_with('/') {
            pos = found
                .as_str()
                .find('/')
                .map_or(found.end(), |slash| found.start() + slash + 1);
        } else {
            spans.push((found.start(), found.end()));
            pos = found.end();
        }
    }

    let mut out = String::with_capacity(text.len());
    let mut placeholders = Vec::with_capacity(spans.len());
    let mut last = 0;
    for (counter, (start, end)) in spans.into_iter().enumerate() {
        out.push_str(&text[last..start]);
        let placeholder = format!("FRACTION_{counter}");
        out.push_str(&placeholder);
        placeholders.push((placeholder, text[start..end].to_string()));
        last = end;
    }
    out.push_str(&text[last..]);
    (out, placeholders)
}

fn restore_fractions(text: &str, placeholders: &[(String, String)]) -> String {
    let mut restored = text.to_string();
    for (placeholder, fraction) in placeholders {
        restored = restored.replace(placeholder, fraction);
    }
    restored
}

/// Contracts the spelled-out diagonal directionals before classification so
/// they always land in abbreviated form, whatever the suffix rules would
/// have said.
fn contract_diagonals(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            let upper = word.to_uppercase();
            match upper.trim_end_matches('.') {
                "SOUTHEAST" => "SE".to_string(),
                "SOUTHWEST" => "SW".to_string(),
                "NORTHEAST" => "NE".to_string(),
                "NORTHWEST" => "NW".to_string(),
                _ => word.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        AddressNormalizer, protect_fractions, repair_newline_artifacts, split_letters_from_digits,
        split_slash_chains, strip_throwaway_phrases,
    };

    #[test]
    fn newline_artifacts_collapse_to_joins() {
        assert_eq!(repair_newline_artifacts("123 Main St/n Apt 4"), "123 Main St Apt 4");
        assert_eq!(repair_newline_artifacts("/n 123 Main"), "123 Main");
        assert_eq!(repair_newline_artifacts("123 Main /n"), "123 Main");
        assert_eq!(repair_newline_artifacts("123\\nMain\nSt"), "123 Main St");
    }

    #[test]
    fn newline_repair_keeps_fractions() {
        assert_eq!(repair_newline_artifacts("25 1/2 Main St"), "25 1/2 Main St");
    }

    #[test]
    fn throwaway_phrases_are_removed() {
        assert_eq!(strip_throwaway_phrases("123 Main St See Mailing Address"), "123 Main St");
        assert_eq!(strip_throwaway_phrases("See mailing 123 Main"), "123 Main");
        assert_eq!(strip_throwaway_phrases("UNLISTED"), "");
    }

    #[test]
    fn letters_and_digit_runs_are_separated() {
        assert_eq!(split_letters_from_digits("Center25"), "Center 25");
        assert_eq!(split_letters_from_digits("Box123 Rear2"), "Box 123 Rear 2");
        // Digit-then-letter stays put; unit labels like "2B" are legitimate.
        assert_eq!(split_letters_from_digits("Apt 2B"), "Apt 2B");
    }

    #[test]
    fn slash_chains_keep_only_the_final_slash() {
        assert_eq!(split_slash_chains("25/1/2"), "25 1/2");
        assert_eq!(split_slash_chains("1/2/3/4"), "1 2 3/4");
        assert_eq!(split_slash_chains("1/2"), "1/2");
    }

    #[test]
    fn hash_next_to_designator_is_dropped() {
        let normalizer = AddressNormalizer::new();
        assert_eq!(normalizer.resolve_hash_marks("Apt #4"), "Apt 4");
        assert_eq!(normalizer.resolve_hash_marks("#4 Suite"), "4 Suite");
    }

    #[test]
    fn hash_without_designator_becomes_unit() {
        let normalizer = AddressNormalizer::new();
        assert_eq!(normalizer.resolve_hash_marks("Oak Ave #225a"), "Oak Ave Unit 225a");
        assert_eq!(normalizer.resolve_hash_marks("#"), "Unit");
    }

    #[test]
    fn fractions_are_protected_and_restored() {
        let (protected, placeholders) = protect_fractions("50 Lake Dr Unit 1/2");
        assert_eq!(protected, "50 Lake Dr Unit FRACTION_0");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].1, "1/2");
    }

    #[test]
    fn fraction_scan_skips_chain_heads() {
        // "1/2" is followed by a slash, so only the tail is a fraction.
        let (protected, placeholders) = protect_fractions("1/2/3");
        assert_eq!(protected, "1/FRACTION_0");
        assert_eq!(placeholders[0].1, "2/3");
    }

    #[test]
    fn ordinal_fractions_match_whole() {
        let (_, placeholders) = protect_fractions("25 1/3rd St");
        assert_eq!(placeholders[0].1, "1/3rd");
    }
}
