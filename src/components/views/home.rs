use crate::components::{AppView, Icon};
use crate::playback::VerseKey;
use dioxus::prelude::*;

const FEATURED_VERSE: VerseKey = VerseKey::new(18, 66);

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "space-y-10 py-6",
            header { class: "text-center space-y-4",
                p { class: "devanagari text-4xl text-amber-200", "ॐ" }
                h1 { class: "text-4xl sm:text-5xl font-bold text-white", "GitaVibe" }
                p { class: "text-stone-400 max-w-xl mx-auto",
                    "Learn the Sanskrit of the Bhagavad-gita one verse at a time: hear it chanted, tap any word for its grammar, and practise with flashcards."
                }
            }

            div { class: "grid gap-4 sm:grid-cols-3",
                HomeCard {
                    to: AppView::verse(FEATURED_VERSE),
                    icon: "play",
                    title: "Start with BG {FEATURED_VERSE}",
                    body: "The verse of surrender, with vibe audio and a word-by-word breakdown.",
                }
                HomeCard {
                    to: AppView::VerseIndex {},
                    icon: "book",
                    title: "Browse verses",
                    body: "Every verse in the library, filterable by text and grammar focus.",
                }
                HomeCard {
                    to: AppView::Conjugations {},
                    icon: "grammar",
                    title: "Grammar tables",
                    body: "Noun declension and verb conjugation at a glance.",
                }
            }
        }
    }
}

#[component]
fn HomeCard(to: AppView, icon: String, title: String, body: String) -> Element {
    rsx! {
        Link { to, class: "glass-card p-5 space-y-3 block hover:border-amber-400/40 transition-colors",
            div { class: "w-10 h-10 rounded-xl bg-amber-500/15 flex items-center justify-center text-amber-300",
                Icon { name: icon.clone(), class: "w-5 h-5".to_string() }
            }
            h2 { class: "text-lg font-semibold text-white", "{title}" }
            p { class: "text-sm text-stone-400", "{body}" }
        }
    }
}
