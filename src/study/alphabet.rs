//! Devanagari letter flashcards.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCard {
    pub devanagari: &'static str,
    pub transliteration: &'static str,
}

const fn card(devanagari: &'static str, transliteration: &'static str) -> LetterCard {
    LetterCard {
        devanagari,
        transliteration,
    }
}

pub static DEVANAGARI_CARDS: [LetterCard; 38] = [
    card("अ", "a"),
    card("आ", "ā"),
    card("इ", "i"),
    card("ई", "ī"),
    card("उ", "u"),
    card("ऊ", "ū"),
    card("ए", "e"),
    card("ऐ", "ai"),
    card("ओ", "o"),
    card("औ", "au"),
    card("क", "ka"),
    card("ख", "kha"),
    card("ग", "ga"),
    card("घ", "gha"),
    card("च", "ca"),
    card("छ", "cha"),
    card("ज", "ja"),
    card("झ", "jha"),
    card("ट", "ṭa"),
    card("ड", "ḍa"),
    card("त", "ta"),
    card("थ", "tha"),
    card("द", "da"),
    card("ध", "dha"),
    card("न", "na"),
    card("प", "pa"),
    card("फ", "pha"),
    card("ब", "ba"),
    card("भ", "bha"),
    card("म", "ma"),
    card("य", "ya"),
    card("र", "ra"),
    card("ल", "la"),
    card("व", "va"),
    card("श", "śa"),
    card("ष", "ṣa"),
    card("स", "sa"),
    card("ह", "ha"),
];

/// Cycles through [`DEVANAGARI_CARDS`]; moving always shows the letter side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlphabetTrainer {
    index: usize,
    flipped: bool,
}

impl AlphabetTrainer {
    pub fn current(&self) -> LetterCard {
        DEVANAGARI_CARDS[self.index]
    }

    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn total(&self) -> usize {
        DEVANAGARI_CARDS.len()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn next(&mut self) {
        self.flipped = false;
        self.index = (self.index + 1) % DEVANAGARI_CARDS.len();
    }

    pub fn previous(&mut self) {
        self.flipped = false;
        self.index = (self.index + DEVANAGARI_CARDS.len() - 1) % DEVANAGARI_CARDS.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_wraps_to_the_last_letter() {
        let mut trainer = AlphabetTrainer::default();
        trainer.previous();
        assert_eq!(trainer.position(), 38);
        assert_eq!(trainer.current().transliteration, "ha");
        trainer.next();
        assert_eq!(trainer.current().devanagari, "अ");
    }

    #[test]
    fn moving_resets_the_flip() {
        let mut trainer = AlphabetTrainer::default();
        trainer.flip();
        assert!(trainer.is_flipped());
        trainer.next();
        assert!(!trainer.is_flipped());
        assert_eq!(trainer.current().transliteration, "ā");
    }
}
