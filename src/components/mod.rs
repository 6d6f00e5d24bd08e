//! The components module contains all shared components for our app.

mod account;
mod app;
mod app_view;
mod audio_panel;
mod chant_mode;
mod commentary_panel;
mod devanagari_trainer;
mod flashcard;
mod grammar_intro;
mod grammar_modal;
mod header;
mod icons;
pub(crate) mod media_deck;
mod verse_nav;
mod verse_viewer;
pub mod views;

pub use account::*;
pub use app::*;
pub use app_view::*;
pub use audio_panel::*;
pub use chant_mode::*;
pub use commentary_panel::*;
pub use devanagari_trainer::*;
pub use flashcard::*;
pub use grammar_intro::*;
pub use grammar_modal::*;
pub use header::*;
pub use icons::*;
pub use verse_nav::*;
pub use verse_viewer::*;
// Views are accessed via views::ViewName
