use crate::components::{view_label, AppView, Icon, PrefsSignal};
use dioxus::prelude::*;

#[component]
pub fn Header(view: AppView) -> Element {
    let PrefsSignal(prefs) = use_context::<PrefsSignal>();
    let signed_in = prefs.read().session.is_some();

    rsx! {
        header { class: "mobile-safe-top border-b border-stone-800/60 bg-stone-950/80 backdrop-blur-xl sticky top-0 z-30",
            div { class: "flex items-center justify-between gap-4 px-4 py-3 max-w-5xl mx-auto",
                Link { to: AppView::Home {}, class: "flex items-center gap-3",
                    div { class: "w-9 h-9 rounded-xl bg-gradient-to-br from-amber-500 to-orange-600 flex items-center justify-center text-white font-bold shadow-lg shadow-amber-500/20",
                        "ॐ"
                    }
                    div { class: "hidden sm:block",
                        p { class: "text-base font-bold text-white", "GitaVibe" }
                        p { class: "text-xs text-stone-500", "{view_label(&view)}" }
                    }
                }
                nav { class: "flex items-center gap-1",
                    NavItem {
                        icon: "home",
                        label: "Home",
                        to: AppView::Home {},
                        active: matches!(view, AppView::Home {}),
                    }
                    NavItem {
                        icon: "book",
                        label: "Verses",
                        to: AppView::VerseIndex {},
                        active: matches!(view, AppView::VerseIndex {} | AppView::VersePage { .. }),
                    }
                    NavItem {
                        icon: "grammar",
                        label: "Grammar",
                        to: AppView::Conjugations {},
                        active: matches!(view, AppView::Conjugations {}),
                    }
                    NavItem {
                        icon: "user",
                        label: if signed_in { "Dashboard" } else { "Sign in" },
                        to: AppView::Dashboard {},
                        active: matches!(view, AppView::Dashboard {}),
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(icon: String, label: String, to: AppView, active: bool) -> Element {
    let base_class = "flex items-center gap-2 px-3 py-2 rounded-xl text-sm font-medium transition-all duration-200";
    let active_class = if active {
        "bg-gradient-to-r from-amber-500/20 to-orange-500/10 text-amber-300 shadow-sm"
    } else {
        "text-stone-400 hover:text-white hover:bg-stone-800/50"
    };

    rsx! {
        Link { to, class: "{base_class} {active_class}",
            Icon { name: icon.clone(), class: "w-4 h-4".to_string() }
            span { class: "hidden md:inline", "{label}" }
        }
    }
}
