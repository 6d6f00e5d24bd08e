use crate::api::Verse;
use crate::config::AppConfig;
use crate::text::format_lines;
use dioxus::prelude::*;

/// Line-by-line recitation view. Uses the same layout as the verse viewer
/// so both show the same number of lines.
#[component]
pub fn ChantMode(verse: Verse) -> Element {
    let config = use_context::<AppConfig>();
    let mut active = use_signal(|| false);
    let mut line = use_signal(|| 0usize);

    let devanagari = format_lines(&verse.devanagari, config.line_policy);
    let transliteration = format_lines(&verse.transliteration, config.line_policy);
    let total = devanagari.len().max(transliteration.len());
    let current = line().min(total.saturating_sub(1));

    rsx! {
        section { id: "chant", class: "glass-card p-5 space-y-4",
            div { class: "flex items-center justify-between",
                h2 { class: "text-lg font-semibold text-white", "Chant Mode" }
                button {
                    class: "secondary-button",
                    onclick: move |_| {
                        active.toggle();
                        line.set(0);
                    },
                    if active() { "Close" } else { "Start" }
                }
            }
            if active() && total > 0 {
                div { class: "space-y-4 text-center",
                    for index in 0..total {
                        div {
                            key: "{index}",
                            class: if index == current { "chant-line chant-line-active" } else { "chant-line" },
                            if let Some(text) = devanagari.get(index) {
                                p { class: "devanagari text-2xl", "{text}" }
                            }
                            if let Some(text) = transliteration.get(index) {
                                p { class: "italic text-stone-400", "{text}" }
                            }
                        }
                    }
                    div { class: "flex justify-center gap-3",
                        button {
                            class: "control-button",
                            disabled: current == 0,
                            onclick: move |_| line.set(current.saturating_sub(1)),
                            "Previous line"
                        }
                        button {
                            class: "control-button",
                            disabled: current + 1 >= total,
                            onclick: move |_| line.set(current + 1),
                            "Next line"
                        }
                    }
                }
            }
        }
    }
}
