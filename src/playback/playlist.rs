use serde::{Deserialize, Serialize};
use std::fmt;

/// A Gita verse address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerseKey {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseKey {
    pub const fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }

    /// File stem of the verse's audio assets, e.g. `18_66`.
    pub fn asset_stem(&self) -> String {
        format!("{}_{}", self.chapter, self.verse)
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chapter, self.verse)
    }
}

/// Verses that have a vibe rendition, in listening order.
pub static VIBE_PLAYLIST: [VerseKey; 19] = [
    VerseKey::new(2, 7),
    VerseKey::new(2, 13),
    VerseKey::new(2, 14),
    VerseKey::new(2, 20),
    VerseKey::new(2, 47),
    VerseKey::new(3, 27),
    VerseKey::new(4, 7),
    VerseKey::new(4, 8),
    VerseKey::new(4, 34),
    VerseKey::new(7, 14),
    VerseKey::new(9, 22),
    VerseKey::new(9, 26),
    VerseKey::new(9, 34),
    VerseKey::new(10, 8),
    VerseKey::new(10, 10),
    VerseKey::new(12, 13),
    VerseKey::new(15, 7),
    VerseKey::new(18, 65),
    VerseKey::new(18, 66),
];

/// Read-only view over a fixed playlist. Lookups are linear scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playlist {
    entries: &'static [VerseKey],
}

impl Default for Playlist {
    fn default() -> Self {
        Self::vibe()
    }
}

impl Playlist {
    pub const fn new(entries: &'static [VerseKey]) -> Self {
        Self { entries }
    }

    pub fn vibe() -> Self {
        Self::new(&VIBE_PLAYLIST)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &'static [VerseKey] {
        self.entries
    }

    pub fn get(&self, index: usize) -> Option<VerseKey> {
        self.entries.get(index).copied()
    }

    pub fn position(&self, key: VerseKey) -> Option<usize> {
        self.entries.iter().position(|entry| *entry == key)
    }

    pub fn contains(&self, key: VerseKey) -> bool {
        self.position(key).is_some()
    }

    pub fn previous(&self, key: VerseKey) -> Option<VerseKey> {
        let index = self.position(key)?;
        index.checked_sub(1).and_then(|prev| self.get(prev))
    }

    pub fn next(&self, key: VerseKey) -> Option<VerseKey> {
        let index = self.position(key)?;
        self.get(index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_has_no_previous() {
        let playlist = Playlist::vibe();
        assert_eq!(playlist.len(), 19);
        let first = playlist.get(0).expect("non-empty playlist");
        assert_eq!(playlist.position(first), Some(0));
        assert_eq!(playlist.previous(first), None);
        assert_eq!(playlist.next(first), playlist.get(1));
    }

    #[test]
    fn last_entry_has_no_next() {
        let playlist = Playlist::vibe();
        let last = playlist.get(playlist.len() - 1).expect("non-empty playlist");
        assert_eq!(last, VerseKey::new(18, 66));
        assert_eq!(playlist.next(last), None);
        assert_eq!(playlist.previous(last), Some(VerseKey::new(18, 65)));
    }

    #[test]
    fn verses_outside_the_playlist_have_no_neighbours() {
        let playlist = Playlist::vibe();
        let stray = VerseKey::new(1, 1);
        assert!(!playlist.contains(stray));
        assert_eq!(playlist.previous(stray), None);
        assert_eq!(playlist.next(stray), None);
    }

    #[test]
    fn entries_are_unique() {
        let mut sorted = VIBE_PLAYLIST.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), VIBE_PLAYLIST.len());
    }

    #[test]
    fn keys_format_for_display_and_assets() {
        let key = VerseKey::new(18, 66);
        assert_eq!(key.to_string(), "18.66");
        assert_eq!(key.asset_stem(), "18_66");
    }
}
