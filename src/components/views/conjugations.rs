use crate::study::grammar::{FormTable, BHU_CONJUGATIONS, KEY_CONCEPTS, KRSNA_DECLENSION};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Nouns,
    Verbs,
    Concepts,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Nouns, Tab::Verbs, Tab::Concepts];

    fn label(self) -> &'static str {
        match self {
            Tab::Nouns => "Nouns",
            Tab::Verbs => "Verbs",
            Tab::Concepts => "Key concepts",
        }
    }
}

#[component]
pub fn Conjugations() -> Element {
    let mut tab = use_signal(|| Tab::Nouns);

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-3xl font-bold text-white mb-2", "Grammar Tables" }
                p { class: "text-stone-400", "How Sanskrit words change shape with their role in the sentence." }
            }

            div { class: "flex gap-2",
                for choice in Tab::ALL {
                    button {
                        key: "{choice.label()}",
                        class: if tab() == choice { "filter-chip filter-chip-active" } else { "filter-chip" },
                        onclick: move |_| tab.set(choice),
                        "{choice.label()}"
                    }
                }
            }

            {match tab() {
                Tab::Nouns => rsx! {
                    FormTableView { data: KRSNA_DECLENSION }
                },
                Tab::Verbs => rsx! {
                    p { class: "text-stone-400", "The root √bhū (to be, to become) in three moods and tenses." }
                    for conjugation in BHU_CONJUGATIONS {
                        FormTableView { key: "{conjugation.title}", data: conjugation }
                    }
                    section { class: "glass-card p-5 space-y-2",
                        h2 { class: "text-lg font-semibold text-white", "Past Participle" }
                        p { class: "text-stone-300",
                            "bhūta: \"having become, what has been\". Past participles describe a completed action and often end in -ta or -na."
                        }
                    }
                },
                Tab::Concepts => rsx! {
                    div { class: "grid gap-4 sm:grid-cols-2",
                        for (term, explanation) in KEY_CONCEPTS {
                            section { key: "{term}", class: "glass-card p-5 space-y-2",
                                h2 { class: "font-semibold text-amber-200", "{term}" }
                                p { class: "text-sm text-stone-300 leading-relaxed", "{explanation}" }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn FormTableView(data: FormTable) -> Element {
    let has_usage = data.rows.iter().any(|row| row.usage.is_some());

    rsx! {
        section { class: "glass-card p-5 space-y-3 overflow-x-auto",
            h2 { class: "text-lg font-semibold text-white", "{data.title}" }
            table { class: "w-full text-sm",
                thead {
                    tr { class: "text-left text-stone-500",
                        th { class: "py-2 pr-4", "" }
                        th { class: "py-2 pr-4", "Singular" }
                        th { class: "py-2 pr-4", "Dual" }
                        th { class: "py-2 pr-4", "Plural" }
                        if has_usage {
                            th { class: "py-2", "Use" }
                        }
                    }
                }
                tbody {
                    for row in data.rows.iter() {
                        tr { key: "{row.label}", class: "border-t border-stone-800",
                            td { class: "py-2 pr-4 text-stone-400", "{row.label}" }
                            for form in row.forms {
                                td { class: "py-2 pr-4 italic text-amber-100", "{form}" }
                            }
                            if has_usage {
                                td { class: "py-2 text-stone-400", "{row.usage.unwrap_or_default()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
