use dioxus::prelude::*;

/// Anchor ids of the verse page sections, in page order.
pub const VERSE_SECTIONS: [(&str, &str); 7] = [
    ("verse", "Verse"),
    ("listen", "Listen"),
    ("chant", "Chant"),
    ("commentary", "Commentary"),
    ("primer", "Grammar"),
    ("flashcards", "Flashcards"),
    ("alphabet", "Alphabet"),
];

fn scroll_to(section: &str) {
    let js = format!(
        "document.getElementById({:?})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        section
    );
    let _ = document::eval(&js);
}

#[component]
pub fn VerseNav() -> Element {
    rsx! {
        nav { class: "sticky top-16 z-20 -mx-2 overflow-x-auto",
            div { class: "flex gap-2 px-2 py-2 bg-stone-950/80 backdrop-blur-xl rounded-xl",
                for (id, label) in VERSE_SECTIONS {
                    button {
                        key: "{id}",
                        class: "whitespace-nowrap text-xs px-3 py-1.5 rounded-full border border-stone-800 text-stone-300 hover:text-white hover:border-amber-400/40",
                        onclick: move |_| scroll_to(id),
                        "{label}"
                    }
                }
            }
        }
    }
}
