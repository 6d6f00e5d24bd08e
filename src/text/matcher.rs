use crate::api::Word;
use crate::text::{clean_token, fold_diacritics};

/// Find the word entry a displayed token refers to.
///
/// Comparison ignores case, stripped punctuation and IAST diacritics. A token
/// matches when it equals the entry, or either one is a prefix of the other.
/// The first matching entry in list order wins.
pub fn find_matching_word<'a>(token: &str, words: &'a [Word]) -> Option<&'a Word> {
    let needle = fold_diacritics(&clean_token(token));
    if needle.is_empty() {
        return None;
    }

    words.iter().find(|entry| {
        let candidate = fold_diacritics(&entry.word.to_lowercase());
        !candidate.is_empty()
            && (needle == candidate
                || needle.starts_with(&candidate)
                || candidate.starts_with(&needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, word: &str) -> Word {
        Word {
            id: id.to_string(),
            word: word.to_string(),
            meaning: format!("meaning of {word}"),
            ..Word::default()
        }
    }

    #[test]
    fn punctuation_and_diacritics_are_tolerated() {
        let words = vec![entry("1", "ekam"), entry("2", "mam")];
        let found = find_matching_word("mām,", &words).map(|w| w.id.as_str());
        assert_eq!(found, Some("2"));
    }

    #[test]
    fn matching_ignores_case() {
        let words = vec![entry("1", "Vraja")];
        assert!(find_matching_word("VRAJA", &words).is_some());
    }

    #[test]
    fn prefix_works_both_ways() {
        let words = vec![entry("1", "sarva-dharman")];
        assert!(find_matching_word("sarva", &words).is_some());
        let words = vec![entry("1", "sarva")];
        assert!(find_matching_word("sarva-papebhyo", &words).is_some());
    }

    #[test]
    fn punctuation_only_token_never_matches() {
        let words = vec![entry("1", "aham"), entry("2", "")];
        assert!(find_matching_word("।", &words).is_none());
        assert!(find_matching_word("॥", &words).is_none());
        assert!(find_matching_word("/", &words).is_none());
    }

    #[test]
    fn empty_entries_are_skipped() {
        let words = vec![entry("blank", ""), entry("real", "tvam")];
        let found = find_matching_word("tvāṁ", &words).map(|w| w.id.as_str());
        assert_eq!(found, Some("real"));
    }

    #[test]
    fn first_entry_in_list_order_wins() {
        let words = vec![entry("long", "mamaka"), entry("short", "ma")];
        let found = find_matching_word("ma", &words).map(|w| w.id.as_str());
        assert_eq!(found, Some("long"));
    }

    #[test]
    fn unrelated_token_has_no_match() {
        let words = vec![entry("1", "aham")];
        assert!(find_matching_word("sucah", &words).is_none());
    }
}
