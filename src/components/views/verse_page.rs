use crate::api::{ApiError, BackendClient, Commentary, SourceText, Verse, Word};
use crate::components::{
    backend_client, AppView, AudioPanel, ChantMode, CommentaryPanel, DevanagariTrainer,
    FlashcardQuiz, GrammarIntro, GrammarModal, Icon, PrefsSignal, VerseNav, VerseViewer,
};
use crate::config::AppConfig;
use crate::study::catalog::verse_label;
use dioxus::prelude::*;
use futures_util::future::join;

#[derive(Debug, Clone, PartialEq)]
struct VerseBundle {
    verse: Verse,
    words: Vec<Word>,
    commentaries: Vec<Commentary>,
}

/// The verse row is required; words and commentaries degrade to empty.
async fn load_verse(
    client: BackendClient,
    chapter: u32,
    verse: u32,
    source: Option<SourceText>,
) -> Result<VerseBundle, ApiError> {
    let verse = client.fetch_verse(chapter, verse, source).await?;
    let (words, commentaries) =
        join(client.fetch_words(&verse.id), client.fetch_commentaries(&verse.id)).await;

    let words = words.unwrap_or_else(|e| {
        tracing::warn!(verse = %verse.id, error = %e, "failed to load words");
        Vec::new()
    });
    let commentaries = commentaries.unwrap_or_else(|e| {
        tracing::warn!(verse = %verse.id, error = %e, "failed to load commentaries");
        Vec::new()
    });

    Ok(VerseBundle {
        verse,
        words,
        commentaries,
    })
}

#[component]
pub fn VersePage(chapter: u32, verse: u32, source: String) -> Element {
    let config = use_context::<AppConfig>();
    let PrefsSignal(prefs) = use_context::<PrefsSignal>();
    let mut selected = use_signal(|| None::<Word>);

    let bundle = use_resource(use_reactive(
        (&chapter, &verse, &source),
        move |(chapter, verse, source)| {
            let client = backend_client(&config, &prefs.peek());
            async move {
                tracing::debug!(chapter, verse, source = %source, "loading verse");
                load_verse(client, chapter, verse, SourceText::parse(&source)).await
            }
        },
    ));

    // A new verse closes any open word
    use_effect(use_reactive((&chapter, &verse), move |_| selected.set(None)));

    let content = match &*bundle.read() {
        None => rsx! {
            div { class: "flex items-center justify-center py-20",
                Icon {
                    name: "loader".to_string(),
                    class: "w-8 h-8 text-stone-500".to_string(),
                }
            }
        },
        Some(Err(e)) if e.is_not_found() => rsx! {
            div { class: "glass-card p-8 text-center space-y-4",
                h1 { class: "text-2xl font-semibold text-white", "Verse not found" }
                p { class: "text-stone-400", "There is no verse {chapter}.{verse} in the library yet." }
                Link { to: AppView::VerseIndex {}, class: "primary-button inline-block", "Browse all verses" }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "glass-card p-8 text-center space-y-3",
                h1 { class: "text-2xl font-semibold text-white", "Could not load this verse" }
                p { class: "text-stone-400", "{e}" }
            }
        },
        Some(Ok(loaded)) => {
            let loaded = loaded.clone();
            let label = verse_label(&loaded.verse);
            let source_title = loaded.verse.source().title();
            rsx! {
                div { class: "space-y-6",
                    header { class: "text-center space-y-2",
                        p { class: "text-xs uppercase tracking-widest text-stone-500", "{source_title}" }
                        h1 { class: "text-3xl font-bold text-white", "{label}" }
                        if let Some(focus) = loaded.verse.grammar_focus.as_ref() {
                            span { class: "inline-block text-xs rounded-full bg-amber-500/10 border border-amber-500/20 px-3 py-1 text-amber-200",
                                "{focus}"
                            }
                        }
                    }
                    VerseNav {}
                    VerseViewer {
                        verse: loaded.verse.clone(),
                        words: loaded.words.clone(),
                        on_select: move |word| selected.set(Some(word)),
                    }
                    AudioPanel { chapter, verse }
                    ChantMode { verse: loaded.verse.clone() }
                    CommentaryPanel { commentaries: loaded.commentaries.clone() }
                    GrammarIntro {}
                    FlashcardQuiz { words: loaded.words.clone() }
                    DevanagariTrainer {}
                }
            }
        }
    };

    rsx! {
        {content}
        if let Some(word) = selected() {
            GrammarModal { word, on_close: move |_| selected.set(None) }
        }
    }
}
