//! Flashcard quiz over a verse's words.

use crate::api::Word;
use rand::seq::SliceRandom;
use rand::Rng;

/// Cards drawn per round.
pub const DECK_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Meaning,
    Form,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub word_id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    pub answer: String,
    pub why_matters: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Asking,
    Revealed,
    Finished,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

/// One meaning question per word, plus a grammatical-form question for
/// words that carry a case or tense.
pub fn build_questions(words: &[Word]) -> Vec<Question> {
    let mut questions = Vec::with_capacity(words.len() * 2);
    for word in words {
        questions.push(Question {
            word_id: word.id.clone(),
            kind: QuestionKind::Meaning,
            prompt: format!("What does \"{}\" mean?", word.word),
            answer: word.meaning.clone(),
            why_matters: non_blank(&word.spiritual_insight).map(str::to_string),
        });

        if non_blank(&word.grammatical_case).is_some() || non_blank(&word.tense).is_some() {
            let answer = [&word.grammatical_case, &word.number, &word.tense]
                .into_iter()
                .filter_map(non_blank)
                .collect::<Vec<_>>()
                .join(", ");
            questions.push(Question {
                word_id: word.id.clone(),
                kind: QuestionKind::Form,
                prompt: format!("What is the grammatical form of \"{}\"?", word.word),
                answer,
                why_matters: non_blank(&word.grammar_note).map(str::to_string),
            });
        }
    }
    questions
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlashcardDeck {
    pool: Vec<Question>,
    deck: Vec<Question>,
    index: usize,
    revealed: bool,
    score: usize,
    answered: usize,
    finished: bool,
}

impl FlashcardDeck {
    pub fn new<R: Rng + ?Sized>(pool: Vec<Question>, rng: &mut R) -> Self {
        let mut deck = Self {
            pool,
            deck: Vec::new(),
            index: 0,
            revealed: false,
            score: 0,
            answered: 0,
            finished: false,
        };
        deck.restart(rng);
        deck
    }

    pub fn from_words<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Self {
        Self::new(build_questions(words), rng)
    }

    /// No questions could be built for this verse.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// One-based position of the current card.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn phase(&self) -> CardPhase {
        if self.finished || self.deck.is_empty() {
            CardPhase::Finished
        } else if self.revealed {
            CardPhase::Revealed
        } else {
            CardPhase::Asking
        }
    }

    pub fn current(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.deck.get(self.index)
    }

    pub fn reveal(&mut self) {
        if self.phase() == CardPhase::Asking {
            self.revealed = true;
        }
    }

    /// Grade the revealed card and move on.
    pub fn answer(&mut self, knew_it: bool) {
        if self.phase() != CardPhase::Revealed {
            return;
        }
        if knew_it {
            self.score += 1;
        }
        self.answered += 1;
        self.revealed = false;
        if self.index + 1 >= self.deck.len() {
            self.finished = true;
        } else {
            self.index += 1;
        }
    }

    /// Reshuffle the pool and draw a fresh round.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut shuffled = self.pool.clone();
        shuffled.shuffle(rng);
        shuffled.truncate(DECK_SIZE);
        self.deck = shuffled;
        self.index = 0;
        self.revealed = false;
        self.score = 0;
        self.answered = 0;
        self.finished = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(id: &str, case: Option<&str>, tense: Option<&str>) -> Word {
        Word {
            id: id.to_string(),
            word: format!("w{id}"),
            meaning: format!("meaning {id}"),
            grammatical_case: case.map(str::to_string),
            number: case.map(|_| "singular".to_string()),
            tense: tense.map(str::to_string),
            spiritual_insight: Some("  ".to_string()),
            grammar_note: Some("note".to_string()),
            ..Word::default()
        }
    }

    #[test]
    fn form_questions_only_for_inflected_words() {
        let words = vec![
            word("1", Some("accusative"), None),
            word("2", None, None),
            word("3", None, Some("future")),
        ];
        let questions = build_questions(&words);
        assert_eq!(questions.len(), 5);
        let forms: Vec<&Question> = questions
            .iter()
            .filter(|q| q.kind == QuestionKind::Form)
            .collect();
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[0].answer, "accusative, singular");
        assert_eq!(forms[1].answer, "future");
        assert_eq!(forms[0].why_matters.as_deref(), Some("note"));
        // Blank insight is dropped.
        assert_eq!(questions[0].why_matters, None);
    }

    #[test]
    fn deck_draws_at_most_five_cards() {
        let words: Vec<Word> = (0..10).map(|i| word(&i.to_string(), Some("nominative"), None)).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let deck = FlashcardDeck::from_words(&words, &mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.position(), 1);
        assert_eq!(deck.phase(), CardPhase::Asking);
    }

    #[test]
    fn answering_requires_reveal_and_scores() {
        let words = vec![word("1", None, None), word("2", None, None)];
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = FlashcardDeck::from_words(&words, &mut rng);

        deck.answer(true);
        assert_eq!(deck.answered(), 0);

        deck.reveal();
        assert_eq!(deck.phase(), CardPhase::Revealed);
        deck.answer(true);
        assert_eq!(deck.position(), 2);
        assert_eq!(deck.phase(), CardPhase::Asking);

        deck.reveal();
        deck.answer(false);
        assert_eq!(deck.phase(), CardPhase::Finished);
        assert_eq!((deck.score(), deck.answered()), (1, 2));
        assert!(deck.current().is_none());
    }

    #[test]
    fn restart_resets_progress() {
        let words = vec![word("1", Some("dative"), None)];
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = FlashcardDeck::from_words(&words, &mut rng);
        while deck.phase() != CardPhase::Finished {
            deck.reveal();
            deck.answer(true);
        }
        assert_eq!(deck.score(), 2);
        deck.restart(&mut rng);
        assert_eq!((deck.score(), deck.answered(), deck.position()), (0, 0, 1));
        assert_eq!(deck.phase(), CardPhase::Asking);
    }

    #[test]
    fn no_words_means_empty_deck() {
        let mut rng = StdRng::seed_from_u64(0);
        let deck = FlashcardDeck::from_words(&[], &mut rng);
        assert!(deck.is_empty());
        assert_eq!(deck.phase(), CardPhase::Finished);
    }
}
