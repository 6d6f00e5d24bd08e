//! Verse line layout.
//!
//! Every place that draws a verse (hero viewer, chant mode) goes through
//! [`format_lines`] with the deployment's [`LinePolicy`], so the same text
//! always breaks the same way.

use serde::{Deserialize, Serialize};

/// Upper bound on lines produced by the word-group fallback.
pub const TARGET_LINES: usize = 4;

/// A single pause-split segment longer than this is bisected.
const BISECT_MIN_CHARS: usize = 20;

const PAUSE_MARKS: [char; 2] = ['।', '॥'];

/// How text without authored line breaks is split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinePolicy {
    /// Up to four roughly even groups of words.
    #[default]
    WordGroups,
    /// Break after each danda, bisecting a long unbroken line.
    PauseMarks,
}

impl LinePolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "word-groups" | "words" | "four-lines" => Some(Self::WordGroups),
            "pause-marks" | "danda" => Some(Self::PauseMarks),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::WordGroups => "word-groups",
            Self::PauseMarks => "pause-marks",
        }
    }
}

/// Lay out verse text as display lines.
///
/// Authored newlines win: two or more non-empty lines come back trimmed and
/// otherwise untouched, whatever the policy.
pub fn format_lines(text: &str, policy: LinePolicy) -> Vec<String> {
    if let Some(lines) = authored_lines(text) {
        return lines;
    }

    match policy {
        LinePolicy::WordGroups => split_word_groups(text, TARGET_LINES),
        LinePolicy::PauseMarks => split_at_pause_marks(text),
    }
}

fn authored_lines(text: &str) -> Option<Vec<String>> {
    let lines = non_empty_lines(text);
    if lines.len() >= 2 {
        Some(lines)
    } else {
        None
    }
}

fn non_empty_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split into consecutive chunks of `ceil(words / target)` words.
///
/// Short texts (at most `target` words) stay on one line; nothing is padded.
pub fn split_word_groups(text: &str, target: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }
    let target = target.max(1);
    if words.len() <= target {
        return vec![text.trim().to_string()];
    }

    let per_line = words.len().div_ceil(target);
    words.chunks(per_line).map(|chunk| chunk.join(" ")).collect()
}

/// Devanagari layout that ends a line after every `।` or `॥`.
pub fn split_at_pause_marks(text: &str) -> Vec<String> {
    let mut marked = String::with_capacity(text.len() + 8);
    let mut skip_space = false;
    for ch in text.chars() {
        if skip_space && ch.is_whitespace() {
            continue;
        }
        skip_space = false;
        marked.push(ch);
        if PAUSE_MARKS.contains(&ch) {
            marked.push('\n');
            skip_space = true;
        }
    }

    let parts = non_empty_lines(&marked);
    if let [only] = parts.as_slice() {
        if only.chars().count() > BISECT_MIN_CHARS {
            let words: Vec<&str> = only.split_whitespace().collect();
            if words.len() >= 2 {
                let mid = words.len().div_ceil(2);
                return vec![words[..mid].join(" "), words[mid..].join(" ")];
            }
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG_18_66: &str = "sarva-dharman parityajya mam ekam saranam vraja aham tvam sarva-papebhyo moksayisyami ma sucah";

    fn four_lines(text: &str) -> Vec<String> {
        format_lines(text, LinePolicy::WordGroups)
    }

    fn words_of(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|line| line.split_whitespace().map(str::to_string))
            .collect()
    }

    #[test]
    fn twelve_words_become_four_lines_of_three() {
        let lines = four_lines(BG_18_66);
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(line.split_whitespace().count(), 3);
        }
        assert_eq!(lines[0], "sarva-dharman parityajya mam");
        assert_eq!(lines[3], "moksayisyami ma sucah");
    }

    #[test]
    fn authored_lines_pass_through_verbatim() {
        let text = "sarva-dharmān parityajya\n  mām ekaṁ śaraṇaṁ vraja |\n\nahaṁ tvāṁ sarva-pāpebhyo\nmokṣayiṣyāmi mā śucaḥ ||";
        let lines = four_lines(text);
        assert_eq!(
            lines,
            vec![
                "sarva-dharmān parityajya",
                "mām ekaṁ śaraṇaṁ vraja |",
                "ahaṁ tvāṁ sarva-pāpebhyo",
                "mokṣayiṣyāmi mā śucaḥ ||",
            ]
        );
        // Same answer under the other policy.
        assert_eq!(format_lines(text, LinePolicy::PauseMarks), lines);
    }

    #[test]
    fn formatting_is_idempotent_once_lines_exist() {
        let first = four_lines(BG_18_66);
        let again = four_lines(&first.join("\n"));
        assert_eq!(first, again);
    }

    #[test]
    fn fallback_never_exceeds_four_lines_and_keeps_word_order() {
        let base: Vec<String> = (0..40).map(|i| format!("w{i}")).collect();
        for count in 1..=base.len() {
            let text = base[..count].join(" ");
            let lines = four_lines(&text);
            assert!(lines.len() <= TARGET_LINES, "{count} words gave {lines:?}");
            assert_eq!(words_of(&lines), base[..count].to_vec());
        }
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(four_lines("  om tat sat  "), vec!["om tat sat"]);
        assert_eq!(four_lines("a b c d"), vec!["a b c d"]);
    }

    #[test]
    fn last_chunk_may_be_shorter() {
        let lines = four_lines("a b c d e f g");
        assert_eq!(lines, vec!["a b", "c d", "e f", "g"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(four_lines("").is_empty());
        assert!(four_lines(" \n \n").is_empty());
    }

    #[test]
    fn pause_marks_end_lines() {
        let text = "सर्वधर्मान्परित्यज्य मामेकं शरणं व्रज । अहं त्वां सर्वपापेभ्यो मोक्षयिष्यामि मा शुचः ॥";
        let lines = split_at_pause_marks(text);
        assert_eq!(
            lines,
            vec![
                "सर्वधर्मान्परित्यज्य मामेकं शरणं व्रज ।",
                "अहं त्वां सर्वपापेभ्यो मोक्षयिष्यामि मा शुचः ॥",
            ]
        );
    }

    #[test]
    fn long_unmarked_line_is_bisected() {
        let text = "सर्वधर्मान्परित्यज्य मामेकं शरणं व्रज अहं";
        let lines = format_lines(text, LinePolicy::PauseMarks);
        assert_eq!(lines, vec!["सर्वधर्मान्परित्यज्य मामेकं शरणं", "व्रज अहं"]);
    }

    #[test]
    fn short_unmarked_line_is_left_alone() {
        assert_eq!(split_at_pause_marks("ॐ तत् सत्"), vec!["ॐ तत् सत्"]);
    }

    #[test]
    fn policy_names_parse() {
        assert_eq!(LinePolicy::parse("pause-marks"), Some(LinePolicy::PauseMarks));
        assert_eq!(LinePolicy::parse(" Word-Groups "), Some(LinePolicy::WordGroups));
        assert_eq!(LinePolicy::parse("sideways"), None);
        assert_eq!(LinePolicy::default().as_str(), "word-groups");
    }
}
