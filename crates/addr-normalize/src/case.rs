//! Word-casing helpers shared by the rewrite passes.

/// Title-cases a single word: the first letter of each alphabetic run is
/// upper-cased, every following letter lower-cased. A run restarts at any
/// non-letter, so "225a" becomes "225A" and "o'brien" becomes "O'Brien".
///
/// Every table lookup in this crate canonicalizes through this function, so
/// membership tests are case-insensitive without storing extra spellings.
#[must_use]
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut in_run = false;
    for ch in word.chars() {
        if ch.is_alphabetic() {
            if in_run {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn capitalizes_plain_words() {
        assert_eq!(title_case("main"), "Main");
        assert_eq!(title_case("BOULEVARD"), "Boulevard");
        assert_eq!(title_case("aPt"), "Apt");
    }

    #[test]
    fn restarts_runs_after_non_letters() {
        assert_eq!(title_case("225a"), "225A");
        assert_eq!(title_case("2b"), "2B");
        assert_eq!(title_case("o'brien"), "O'Brien");
    }

    #[test]
    fn two_letter_directionals_lose_their_second_capital() {
        // "NE" title-cases to "Ne", which is why the two-letter compass
        // abbreviations never collide with the reverse suffix table.
        assert_eq!(title_case("NE"), "Ne");
        assert_eq!(title_case("sw"), "Sw");
    }

    #[test]
    fn leaves_digits_and_punctuation_alone() {
        assert_eq!(title_case("1/2"), "1/2");
        assert_eq!(title_case(""), "");
    }
}
