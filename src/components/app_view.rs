//! Routes for the study app.

use dioxus::prelude::*;

use crate::components::views::{Conjugations, Dashboard, Home, VerseIndex, VersePage};
use crate::components::AppShell;
use crate::playback::VerseKey;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/verses")]
        VerseIndex {},
        #[route("/verse/:chapter/:verse?:source")]
        VersePage { chapter: u32, verse: u32, source: String },
        #[route("/dashboard")]
        Dashboard {},
        #[route("/grammar/conjugations")]
        Conjugations {},
}

impl AppView {
    /// Verse page without a source filter; the backend prefers the Gita row.
    pub fn verse(key: VerseKey) -> Self {
        AppView::VersePage {
            chapter: key.chapter,
            verse: key.verse,
            source: String::new(),
        }
    }
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home {} => "Home",
        AppView::VerseIndex {} => "Verses",
        AppView::VersePage { .. } => "Verse",
        AppView::Dashboard {} => "Dashboard",
        AppView::Conjugations {} => "Grammar",
    }
}
