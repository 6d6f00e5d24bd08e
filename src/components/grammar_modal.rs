use crate::api::Word;
use crate::components::Icon;
use crate::study::grammar::{plain_explanation, word_details};
use dioxus::prelude::*;

/// Overlay with the full analysis of one tapped word.
#[component]
pub fn GrammarModal(word: Word, on_close: EventHandler<()>) -> Element {
    let details = word_details(&word);
    let explanation = plain_explanation(&word);
    let note = word.grammar_note.clone().filter(|n| !n.trim().is_empty());
    let insight = word.spiritual_insight.clone().filter(|n| !n.trim().is_empty());

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-end sm:items-center justify-center bg-black/60 backdrop-blur-sm",
            onclick: move |_| on_close.call(()),
            div {
                class: "glass-card w-full sm:max-w-lg max-h-[85vh] overflow-y-auto p-6 space-y-4",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "flex items-start justify-between gap-4",
                    h2 { class: "text-2xl font-semibold text-amber-100 italic", "{word.word}" }
                    button {
                        class: "p-2 rounded-lg text-stone-400 hover:text-white hover:bg-stone-800/60",
                        onclick: move |_| on_close.call(()),
                        Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
                    }
                }
                dl { class: "grid grid-cols-[auto_1fr] gap-x-4 gap-y-2 text-sm",
                    for (label, value) in details {
                        dt { class: "text-stone-500", "{label}" }
                        dd { class: "text-stone-100", "{value}" }
                    }
                }
                if let Some(explanation) = explanation {
                    div { class: "rounded-xl bg-amber-500/10 border border-amber-500/20 p-4",
                        p { class: "text-xs uppercase tracking-widest text-amber-400 mb-1", "In plain English" }
                        p { class: "text-stone-200", "{explanation}" }
                    }
                }
                if let Some(note) = note {
                    div {
                        p { class: "text-xs uppercase tracking-widest text-stone-500 mb-1", "Grammar note" }
                        p { class: "text-stone-300", "{note}" }
                    }
                }
                if let Some(insight) = insight {
                    div {
                        p { class: "text-xs uppercase tracking-widest text-stone-500 mb-1", "Spiritual insight" }
                        p { class: "text-stone-300", "{insight}" }
                    }
                }
            }
        }
    }
}
