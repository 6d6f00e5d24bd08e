//! Study aids around a verse: flashcards, the alphabet trainer, grammar
//! reference, and the verse library.

pub mod alphabet;
pub mod catalog;
pub mod flashcards;
pub mod grammar;
