use crate::components::Icon;
use crate::study::alphabet::AlphabetTrainer;
use dioxus::prelude::*;

#[component]
pub fn DevanagariTrainer() -> Element {
    let mut trainer = use_signal(AlphabetTrainer::default);
    let state = trainer();
    let card = state.current();

    rsx! {
        section { id: "alphabet", class: "glass-card p-5 space-y-4",
            div { class: "flex items-center justify-between",
                h2 { class: "text-lg font-semibold text-white", "Devanagari Trainer" }
                span { class: "text-xs text-stone-500", "{state.position()} / {state.total()}" }
            }
            button {
                class: "w-full h-40 rounded-2xl border border-stone-700 bg-stone-900/60 flex items-center justify-center hover:border-amber-400/40 transition-colors",
                onclick: move |_| trainer.write().flip(),
                if state.is_flipped() {
                    span { class: "text-4xl italic text-amber-200", "{card.transliteration}" }
                } else {
                    span { class: "devanagari text-6xl text-amber-100", "{card.devanagari}" }
                }
            }
            p { class: "text-center text-xs text-stone-500", "Tap the card to flip" }
            div { class: "flex justify-between",
                button {
                    class: "control-button",
                    onclick: move |_| trainer.write().previous(),
                    Icon { name: "prev".to_string(), class: "w-4 h-4".to_string() }
                }
                button {
                    class: "control-button",
                    onclick: move |_| trainer.write().next(),
                    Icon { name: "next".to_string(), class: "w-4 h-4".to_string() }
                }
            }
        }
    }
}
