//! Verse text handling: line layout, transliteration tokens, and word lookup.

mod lines;
mod matcher;
mod tokens;

pub use lines::*;
pub use matcher::*;
pub use tokens::*;
