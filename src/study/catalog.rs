//! Verse library ordering, labels and filters.

use crate::api::{SourceText, Verse};

const PREVIEW_CHARS: usize = 80;

/// Grammar focus tags offered in the library filter.
pub static GRAMMAR_FOCUS_OPTIONS: [&str; 17] = [
    "present tense verbs",
    "compound nouns (samāsa)",
    "instrumental case",
    "nominative masculine",
    "dative case",
    "imperative verbs",
    "accusative singular",
    "genitive plural",
    "pronouns + indeclinables",
    "particles (eva, ca)",
    "present participle",
    "past passive participle",
    "compound + genitive",
    "verb root recognition",
    "locative case",
    "indeclinable usage",
    "causative future tense",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFilter {
    #[default]
    All,
    Only(SourceText),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerseFilter {
    pub text: TextFilter,
    pub grammar_focus: Option<String>,
}

impl VerseFilter {
    pub fn matches(&self, verse: &Verse) -> bool {
        if let TextFilter::Only(source) = self.text {
            if verse.source() != source {
                return false;
            }
        }
        match &self.grammar_focus {
            Some(focus) => verse.grammar_focus.as_deref() == Some(focus.as_str()),
            None => true,
        }
    }

    pub fn apply<'a>(&self, verses: &'a [Verse]) -> Vec<&'a Verse> {
        verses.iter().filter(|verse| self.matches(verse)).collect()
    }
}

/// Short reference such as `BG 18.66` or `NOI 3`.
pub fn verse_label(verse: &Verse) -> String {
    match verse.source() {
        SourceText::Noi => format!("NOI {}", verse.verse),
        SourceText::Gita => format!("BG {}.{}", verse.chapter, verse.verse),
    }
}

/// `chapter * 100 + verse` for the Gita; Nectar of Instruction verses share
/// the chapter-one band as `100 + verse`.
pub fn verse_sort_key(verse: &Verse) -> u32 {
    match verse.source() {
        SourceText::Noi => 100 + verse.verse,
        SourceText::Gita => verse.chapter * 100 + verse.verse,
    }
}

pub fn sort_verses(verses: &mut [Verse]) {
    verses.sort_by_key(verse_sort_key);
}

/// Distinct Gita chapters present, ascending.
pub fn gita_chapters(verses: &[Verse]) -> Vec<u32> {
    let mut chapters: Vec<u32> = verses
        .iter()
        .filter(|verse| verse.source() == SourceText::Gita)
        .map(|verse| verse.chapter)
        .collect();
    chapters.sort_unstable();
    chapters.dedup();
    chapters
}

/// Library sections: one per Gita chapter in order, then the Nectar of
/// Instruction. Sections with no matching verse are left out.
pub fn group_verses(verses: &[Verse], filter: &VerseFilter) -> Vec<(String, Vec<Verse>)> {
    let matched = filter.apply(verses);
    let mut groups: Vec<(String, Vec<Verse>)> = gita_chapters(verses)
        .into_iter()
        .map(|chapter| {
            let in_chapter: Vec<Verse> = matched
                .iter()
                .filter(|v| v.source() == SourceText::Gita && v.chapter == chapter)
                .map(|v| (*v).clone())
                .collect();
            (format!("Chapter {chapter}"), in_chapter)
        })
        .collect();

    let noi: Vec<Verse> = matched
        .iter()
        .filter(|v| v.source() == SourceText::Noi)
        .map(|v| (*v).clone())
        .collect();
    groups.push((SourceText::Noi.title().to_string(), noi));

    groups.retain(|(_, verses)| !verses.is_empty());
    groups
}

/// First 80 characters of the translation followed by an ellipsis.
pub fn translation_preview(translation: &str) -> String {
    let head: String = translation.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(chapter: u32, number: u32, source: Option<&str>, focus: Option<&str>) -> Verse {
        Verse {
            id: format!("{chapter}-{number}"),
            chapter,
            verse: number,
            source_text: source.map(str::to_string),
            grammar_focus: focus.map(str::to_string),
            ..Verse::default()
        }
    }

    #[test]
    fn labels_follow_source() {
        assert_eq!(verse_label(&verse(18, 66, Some("gita"), None)), "BG 18.66");
        assert_eq!(verse_label(&verse(1, 3, Some("noi"), None)), "NOI 3");
    }

    #[test]
    fn noi_sorts_inside_the_chapter_one_band() {
        let mut verses = vec![
            verse(2, 7, Some("gita"), None),
            verse(1, 5, Some("noi"), None),
            verse(1, 1, Some("gita"), None),
            verse(18, 66, None, None),
        ];
        sort_verses(&mut verses);
        let labels: Vec<String> = verses.iter().map(verse_label).collect();
        assert_eq!(labels, vec!["BG 1.1", "NOI 5", "BG 2.7", "BG 18.66"]);
    }

    #[test]
    fn filters_combine_text_and_focus() {
        let verses = vec![
            verse(2, 47, Some("gita"), Some("imperative verbs")),
            verse(1, 1, Some("noi"), Some("imperative verbs")),
            verse(18, 66, Some("gita"), Some("causative future tense")),
        ];
        let filter = VerseFilter {
            text: TextFilter::Only(SourceText::Gita),
            grammar_focus: Some("imperative verbs".to_string()),
        };
        let matched: Vec<&str> = filter.apply(&verses).into_iter().map(|v| v.id.as_str()).collect();
        assert_eq!(matched, vec!["2-47"]);
        assert_eq!(VerseFilter::default().apply(&verses).len(), 3);
    }

    #[test]
    fn chapters_are_distinct_and_gita_only() {
        let verses = vec![
            verse(4, 7, Some("gita"), None),
            verse(2, 7, Some("gita"), None),
            verse(4, 8, Some("gita"), None),
            verse(9, 1, Some("noi"), None),
        ];
        assert_eq!(gita_chapters(&verses), vec![2, 4]);
    }

    #[test]
    fn groups_follow_chapters_with_noi_last() {
        let mut verses = vec![
            verse(4, 7, Some("gita"), Some("locative case")),
            verse(1, 3, Some("noi"), None),
            verse(2, 7, None, None),
            verse(2, 13, Some("gita"), Some("locative case")),
        ];
        sort_verses(&mut verses);

        let groups = group_verses(&verses, &VerseFilter::default());
        let shape: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|(title, verses)| (title.as_str(), verses.iter().map(|v| v.id.as_str()).collect()))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("Chapter 2", vec!["2-7", "2-13"]),
                ("Chapter 4", vec!["4-7"]),
                (SourceText::Noi.title(), vec!["1-3"]),
            ]
        );

        let focused = VerseFilter {
            text: TextFilter::All,
            grammar_focus: Some("locative case".to_string()),
        };
        let titles: Vec<String> = group_verses(&verses, &focused)
            .into_iter()
            .map(|(title, _)| title)
            .collect();
        assert_eq!(titles, vec!["Chapter 2", "Chapter 4"]);
    }

    #[test]
    fn preview_truncates_on_characters() {
        let long = "ā".repeat(100);
        let preview = translation_preview(&long);
        assert_eq!(preview.chars().count(), 83);
        assert_eq!(translation_preview("Short"), "Short...");
    }
}
