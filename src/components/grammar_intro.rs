use crate::components::{AppView, Icon};
use crate::study::grammar::GRAMMAR_PRIMER;
use dioxus::prelude::*;

/// Accordion of beginner grammar concepts.
#[component]
pub fn GrammarIntro() -> Element {
    let mut open = use_signal(|| None::<usize>);

    rsx! {
        section { id: "primer", class: "glass-card p-5 space-y-3",
            div { class: "flex items-center justify-between",
                h2 { class: "text-lg font-semibold text-white", "Grammar Primer" }
                Link {
                    to: AppView::Conjugations {},
                    class: "text-sm text-amber-300 hover:text-amber-200",
                    "Full tables"
                }
            }
            for (index, entry) in GRAMMAR_PRIMER.iter().enumerate() {
                div { key: "{entry.term}", class: "rounded-xl border border-stone-800 overflow-hidden",
                    button {
                        class: "w-full flex items-center justify-between px-4 py-3 text-left hover:bg-stone-800/40",
                        onclick: move |_| {
                            let next = if open() == Some(index) { None } else { Some(index) };
                            open.set(next);
                        },
                        span { class: "font-medium text-stone-100",
                            "{entry.term}"
                            if let Some(sanskrit) = entry.sanskrit {
                                span { class: "devanagari ml-2 text-amber-300", "{sanskrit}" }
                            }
                        }
                        Icon { name: "chevron-down".to_string(), class: "w-4 h-4".to_string() }
                    }
                    if open() == Some(index) {
                        div { class: "px-4 pb-4 space-y-2 text-sm",
                            p { class: "text-stone-300 leading-relaxed", "{entry.explanation}" }
                            if let Some(example) = entry.verse_example {
                                p { class: "text-amber-200/80 italic", "{example}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
