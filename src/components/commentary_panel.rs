use crate::api::Commentary;
use crate::components::Icon;
use dioxus::prelude::*;

/// Acharya commentaries as an accordion; opening one closes the rest.
#[component]
pub fn CommentaryPanel(commentaries: Vec<Commentary>) -> Element {
    let mut open = use_signal(|| None::<String>);

    if commentaries.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { id: "commentary", class: "glass-card p-5 space-y-3",
            h2 { class: "text-lg font-semibold text-white", "Commentaries" }
            for commentary in commentaries {
                {
                    let id = commentary.id.clone();
                    let expanded = open.read().as_deref() == Some(id.as_str());
                    let chevron = if expanded { "w-4 h-4 rotate-180 transition-transform" } else { "w-4 h-4 transition-transform" };
                    rsx! {
                        div { key: "{commentary.id}", class: "rounded-xl border border-stone-800 overflow-hidden",
                            button {
                                class: "w-full flex items-center justify-between px-4 py-3 text-left hover:bg-stone-800/40",
                                onclick: move |_| {
                                    let next = if expanded { None } else { Some(id.clone()) };
                                    open.set(next);
                                },
                                span { class: "font-medium text-amber-100", "{commentary.acharya}" }
                                Icon { name: "chevron-down".to_string(), class: chevron.to_string() }
                            }
                            if expanded {
                                div { class: "px-4 pb-4 space-y-3",
                                    p { class: "text-stone-300 leading-relaxed", "{commentary.summary}" }
                                    if !commentary.key_phrases.is_empty() {
                                        ul { class: "flex flex-wrap gap-2",
                                            for phrase in commentary.key_phrases.iter() {
                                                li { class: "text-xs rounded-full bg-amber-500/10 border border-amber-500/20 px-3 py-1 text-amber-200",
                                                    "{phrase}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
