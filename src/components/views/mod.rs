mod conjugations;
mod dashboard;
mod home;
mod verse_index;
mod verse_page;

pub use conjugations::Conjugations;
pub use dashboard::Dashboard;
pub use home::Home;
pub use verse_index::VerseIndex;
pub use verse_page::VersePage;
