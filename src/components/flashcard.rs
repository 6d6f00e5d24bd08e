use crate::api::Word;
use crate::study::flashcards::{CardPhase, FlashcardDeck, QuestionKind};
use dioxus::prelude::*;

#[component]
pub fn FlashcardQuiz(words: Vec<Word>) -> Element {
    let initial = words.clone();
    let mut deck = use_signal(move || FlashcardDeck::from_words(&initial, &mut rand::thread_rng()));

    use_effect(use_reactive((&words,), move |(words,)| {
        deck.set(FlashcardDeck::from_words(&words, &mut rand::thread_rng()));
    }));

    let current = deck.read().clone();

    let body = if current.is_empty() {
        rsx! {
            p { class: "text-stone-400", "No flashcard data for this verse yet." }
        }
    } else {
        match (current.phase(), current.current()) {
            (CardPhase::Finished, _) | (_, None) => rsx! {
                div { class: "text-center space-y-3",
                    p { class: "text-3xl font-semibold text-amber-200", "{current.score()} / {current.answered()}" }
                    p { class: "text-stone-400", "Round complete" }
                    button {
                        class: "primary-button",
                        onclick: move |_| deck.write().restart(&mut rand::thread_rng()),
                        "Practice again"
                    }
                }
            },
            (phase, Some(question)) => {
                let question = question.clone();
                let kind_label = match question.kind {
                    QuestionKind::Meaning => "Meaning",
                    QuestionKind::Form => "Grammar",
                };
                rsx! {
                    div { class: "space-y-4",
                        div { class: "flex justify-between text-xs uppercase tracking-widest text-stone-500",
                            span { "{kind_label}" }
                            span { "Card {current.position()} of {current.len()} · Score {current.score()}" }
                        }
                        p { class: "text-lg text-stone-100", "{question.prompt}" }
                        if phase == CardPhase::Asking {
                            button {
                                class: "primary-button w-full",
                                onclick: move |_| deck.write().reveal(),
                                "Reveal answer"
                            }
                        } else {
                            div { class: "rounded-xl bg-stone-900/70 border border-stone-800 p-4 space-y-2",
                                p { class: "text-amber-100 font-medium", "{question.answer}" }
                                if let Some(why) = question.why_matters.as_ref() {
                                    p { class: "text-sm text-stone-400", "Why it matters: {why}" }
                                }
                            }
                            div { class: "grid grid-cols-2 gap-3",
                                button {
                                    class: "secondary-button",
                                    onclick: move |_| deck.write().answer(false),
                                    "Didn't know"
                                }
                                button {
                                    class: "primary-button",
                                    onclick: move |_| deck.write().answer(true),
                                    "Knew it"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { id: "flashcards", class: "glass-card p-5 space-y-4",
            h2 { class: "text-lg font-semibold text-white", "Flashcards" }
            {body}
        }
    }
}
