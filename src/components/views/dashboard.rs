use crate::components::{AccountPanel, AppView, DevanagariTrainer, GrammarIntro, Icon, PrefsSignal};
use crate::playback::VIBE_PLAYLIST;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let PrefsSignal(prefs) = use_context::<PrefsSignal>();
    let greeting = match prefs.read().session.as_ref().and_then(|s| s.email.clone()) {
        Some(email) => format!("Welcome back, {email}"),
        None => "Your study space".to_string(),
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-3xl font-bold text-white mb-2", "Dashboard" }
                p { class: "text-stone-400", "{greeting}" }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                div { class: "space-y-6",
                    AccountPanel {}
                    section { class: "glass-card p-5 space-y-3",
                        h2 { class: "text-lg font-semibold text-white", "Vibe playlist" }
                        p { class: "text-sm text-stone-400",
                            "{VIBE_PLAYLIST.len()} verses set to devotional music. Each one plays into the next when auto-advance is on."
                        }
                        div { class: "flex flex-wrap gap-2",
                            for key in VIBE_PLAYLIST {
                                Link {
                                    key: "{key}",
                                    to: AppView::verse(key),
                                    class: "filter-chip",
                                    "BG {key}"
                                }
                            }
                        }
                    }
                    section { class: "glass-card p-5 flex items-center justify-between",
                        div {
                            h2 { class: "text-lg font-semibold text-white", "Grammar tables" }
                            p { class: "text-sm text-stone-400", "Declension and conjugation reference" }
                        }
                        Link { to: AppView::Conjugations {}, class: "control-button",
                            Icon { name: "grammar".to_string(), class: "w-4 h-4".to_string() }
                        }
                    }
                }
                div { class: "space-y-6",
                    DevanagariTrainer {}
                    GrammarIntro {}
                }
            }
        }
    }
}
