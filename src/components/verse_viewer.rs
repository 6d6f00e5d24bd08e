use crate::api::{Verse, Word};
use crate::config::AppConfig;
use crate::text::{find_matching_word, format_lines, tokenize_transliteration, LinePolicy, Token};
use dioxus::prelude::*;

/// Transliteration laid out with the same policy as the Devanagari, split
/// into rows of displayable words.
fn transliteration_rows(text: &str, policy: LinePolicy) -> Vec<Vec<String>> {
    let laid_out = format_lines(text, policy).join("\n");
    let mut rows = vec![Vec::new()];
    for token in tokenize_transliteration(&laid_out) {
        match token {
            Token::Word(word) => {
                if let Some(row) = rows.last_mut() {
                    row.push(word);
                }
            }
            Token::LineBreak => rows.push(Vec::new()),
        }
    }
    rows.retain(|row| !row.is_empty());
    rows
}

#[component]
pub fn VerseViewer(verse: Verse, words: Vec<Word>, on_select: EventHandler<Word>) -> Element {
    let config = use_context::<AppConfig>();
    let mut show_translation = use_signal(|| true);

    let devanagari = format_lines(&verse.devanagari, config.line_policy);
    let rows = transliteration_rows(&verse.transliteration, config.line_policy);

    rsx! {
        section { id: "verse", class: "glass-card p-6 space-y-6 text-center",
            div { class: "space-y-1",
                for line in devanagari.iter() {
                    p { class: "devanagari text-2xl sm:text-3xl leading-relaxed text-amber-100", "{line}" }
                }
            }

            div { class: "space-y-1 text-lg italic text-stone-200",
                for row in rows.iter() {
                    p { class: "flex flex-wrap justify-center gap-x-2",
                        for token in row.iter() {
                            WordToken {
                                token: token.clone(),
                                entry: find_matching_word(token, &words).cloned(),
                                on_select,
                            }
                        }
                    }
                }
                if !words.is_empty() {
                    p { class: "text-xs not-italic text-stone-500 pt-2", "Tap a highlighted word for its grammar" }
                }
            }

            div { class: "space-y-3",
                button {
                    class: "text-sm text-amber-300 hover:text-amber-200",
                    onclick: move |_| show_translation.toggle(),
                    if show_translation() { "Hide translation" } else { "Show translation" }
                }
                if show_translation() {
                    p { class: "text-stone-300 leading-relaxed max-w-2xl mx-auto", "{verse.translation}" }
                }
            }
        }
    }
}

#[component]
fn WordToken(token: String, entry: Option<Word>, on_select: EventHandler<Word>) -> Element {
    match entry {
        Some(word) => rsx! {
            button {
                class: "underline decoration-amber-500/50 decoration-dotted underline-offset-4 hover:text-amber-200 transition-colors",
                title: "{word.meaning}",
                onclick: move |_| on_select.call(word.clone()),
                "{token}"
            }
        },
        None => rsx! {
            span { "{token}" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_the_line_policy() {
        let text = "sarva-dharmān parityajya mām ekaṁ śaraṇaṁ vraja ahaṁ tvāṁ sarva-pāpebhyo mokṣayiṣyāmi mā śucaḥ";
        let rows = transliteration_rows(text, LinePolicy::WordGroups);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["sarva-dharmān", "parityajya", "mām"]);
        assert_eq!(rows.iter().map(Vec::len).sum::<usize>(), 12);
    }

    #[test]
    fn authored_line_breaks_are_kept() {
        let rows = transliteration_rows("karmaṇy evādhikāras te\nmā phaleṣu kadācana", LinePolicy::WordGroups);
        assert_eq!(rows, vec![
            vec!["karmaṇy", "evādhikāras", "te"],
            vec!["mā", "phaleṣu", "kadācana"],
        ]);
    }

    #[test]
    fn rows_match_the_chant_lines() {
        for text in ["a / b c d e f g h", "vraja / aham\n/\nmā śucaḥ", "ahaṁ tvāṁ / sarva-pāpebhyo"] {
            for policy in [LinePolicy::WordGroups, LinePolicy::PauseMarks] {
                let lines = format_lines(text, policy);
                let rows = transliteration_rows(text, policy);
                assert_eq!(rows.len(), lines.len(), "{text:?} under {policy:?}");
                for (row, line) in rows.iter().zip(&lines) {
                    assert_eq!(row.join(" "), *line);
                }
            }
        }
    }

    #[test]
    fn empty_text_has_no_rows() {
        assert!(transliteration_rows("", LinePolicy::PauseMarks).is_empty());
    }
}
