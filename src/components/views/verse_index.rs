use crate::api::{ApiError, SourceText, Verse};
use crate::components::{backend_client, AppView, Icon, PrefsSignal};
use crate::config::AppConfig;
use crate::study::catalog::{
    group_verses, sort_verses, translation_preview, verse_label, TextFilter, VerseFilter,
    GRAMMAR_FOCUS_OPTIONS,
};
use dioxus::prelude::*;

#[component]
pub fn VerseIndex() -> Element {
    let config = use_context::<AppConfig>();
    let PrefsSignal(prefs) = use_context::<PrefsSignal>();
    let mut text_filter = use_signal(TextFilter::default);
    let mut grammar_focus = use_signal(|| None::<String>);

    let verses = use_resource(move || {
        let client = backend_client(&config, &prefs.peek());
        async move {
            let mut verses = client.fetch_verses().await?;
            sort_verses(&mut verses);
            Ok::<_, ApiError>(verses)
        }
    });

    let filter = VerseFilter {
        text: text_filter(),
        grammar_focus: grammar_focus(),
    };

    let listing = match &*verses.read() {
        None => rsx! {
            div { class: "flex items-center justify-center py-20",
                Icon {
                    name: "loader".to_string(),
                    class: "w-8 h-8 text-stone-500".to_string(),
                }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "glass-card p-8 text-center space-y-2",
                p { class: "text-white font-medium", "Could not load the verse library" }
                p { class: "text-sm text-stone-400", "{e}" }
            }
        },
        Some(Ok(all)) => {
            let groups = group_verses(all, &filter);

            if groups.is_empty() {
                rsx! {
                    p { class: "text-center text-stone-400 py-12", "No verses match these filters." }
                }
            } else {
                rsx! {
                    div { class: "space-y-8",
                        for (title, verses) in groups {
                            section { key: "{title}", class: "space-y-3",
                                h2 { class: "text-sm font-semibold uppercase tracking-widest text-stone-500", "{title}" }
                                div { class: "grid gap-3 sm:grid-cols-2",
                                    for verse in verses {
                                        VerseCard { key: "{verse.id}", verse: verse.clone() }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-3xl font-bold text-white mb-2", "Verses" }
                p { class: "text-stone-400", "Every verse in the library, in reading order." }
            }

            div { class: "flex flex-wrap items-center gap-3",
                for (label, value) in [
                    ("All", TextFilter::All),
                    ("Bhagavad-gita", TextFilter::Only(SourceText::Gita)),
                    ("Nectar of Instruction", TextFilter::Only(SourceText::Noi)),
                ] {
                    button {
                        key: "{label}",
                        class: if text_filter() == value { "filter-chip filter-chip-active" } else { "filter-chip" },
                        onclick: move |_| text_filter.set(value),
                        "{label}"
                    }
                }
                select {
                    class: "text-input max-w-xs",
                    onchange: move |evt| {
                        let value = evt.value();
                        grammar_focus.set(if value.is_empty() { None } else { Some(value) });
                    },
                    option { value: "", selected: grammar_focus().is_none(), "Any grammar focus" }
                    for focus in GRAMMAR_FOCUS_OPTIONS {
                        option {
                            key: "{focus}",
                            value: focus,
                            selected: grammar_focus().as_deref() == Some(focus),
                            "{focus}"
                        }
                    }
                }
            }

            {listing}
        }
    }
}

#[component]
fn VerseCard(verse: Verse) -> Element {
    let to = AppView::VersePage {
        chapter: verse.chapter,
        verse: verse.verse,
        source: verse.source().as_str().to_string(),
    };
    let label = verse_label(&verse);
    let preview = translation_preview(&verse.translation);

    rsx! {
        Link { to, class: "glass-card p-4 block space-y-2 hover:border-amber-400/40 transition-colors",
            div { class: "flex items-center justify-between gap-2",
                span { class: "font-semibold text-amber-200", "{label}" }
                if let Some(focus) = verse.grammar_focus.as_ref() {
                    span { class: "text-xs text-stone-500 truncate", "{focus}" }
                }
            }
            p { class: "text-sm text-stone-400", "{preview}" }
        }
    }
}
