//! Transliteration tokens for tap-to-define rendering.

/// Characters stripped from a token before it is compared with word entries.
pub const TOKEN_PUNCTUATION: &[char] = &[
    '/', '|', '"', '\'', '‘', '’', '“', '”', ',', '.', ';', ':', '!', '?', '(', ')', '।', '॥',
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A displayable unit, punctuation included.
    Word(String),
    /// Boundary between two verse lines.
    LineBreak,
}

/// Split transliteration into words, turning newlines into
/// [`Token::LineBreak`].
///
/// Only newlines end a line. A bare `/` separator stays a word so the rows
/// line up with the formatted lines; it cleans to nothing and never matches.
/// Breaks never lead, trail, or repeat.
pub fn tokenize_transliteration(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for line in text.split('\n') {
        push_break(&mut tokens);
        tokens.extend(line.split_whitespace().map(|unit| Token::Word(unit.to_string())));
    }
    if tokens.last() == Some(&Token::LineBreak) {
        tokens.pop();
    }
    tokens
}

fn push_break(tokens: &mut Vec<Token>) {
    if matches!(tokens.last(), Some(Token::Word(_))) {
        tokens.push(Token::LineBreak);
    }
}

/// Lowercased token with [`TOKEN_PUNCTUATION`] removed.
pub fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|ch| !TOKEN_PUNCTUATION.contains(ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Fold IAST diacritics onto plain Latin letters so `mām` and `mam`
/// compare equal. Combining marks are dropped.
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .filter(|ch| !('\u{0300}'..='\u{036F}').contains(ch))
        .map(|ch| match ch {
            'ā' | 'Ā' => 'a',
            'ī' | 'Ī' => 'i',
            'ū' | 'Ū' => 'u',
            'ṛ' | 'Ṛ' | 'ṝ' | 'Ṝ' => 'r',
            'ḷ' | 'Ḷ' | 'ḹ' => 'l',
            'ṁ' | 'Ṁ' | 'ṃ' | 'Ṃ' => 'm',
            'ḥ' | 'Ḥ' => 'h',
            'ṅ' | 'Ṅ' | 'ñ' | 'Ñ' | 'ṇ' | 'Ṇ' => 'n',
            'ṭ' | 'Ṭ' => 't',
            'ḍ' | 'Ḍ' => 'd',
            'ś' | 'Ś' | 'ṣ' | 'Ṣ' => 's',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Token {
        Token::Word(text.to_string())
    }

    #[test]
    fn newlines_become_single_breaks() {
        let tokens = tokenize_transliteration("mām ekaṁ\n\n  ahaṁ tvāṁ\n");
        assert_eq!(
            tokens,
            vec![word("mām"), word("ekaṁ"), Token::LineBreak, word("ahaṁ"), word("tvāṁ")]
        );
    }

    #[test]
    fn slash_separators_do_not_end_lines() {
        let tokens = tokenize_transliteration("vraja / aham\nmā śucaḥ");
        assert_eq!(
            tokens,
            vec![word("vraja"), word("/"), word("aham"), Token::LineBreak, word("mā"), word("śucaḥ")]
        );
        assert_eq!(clean_token("/"), "");
    }

    #[test]
    fn cleaning_strips_punctuation_and_case() {
        assert_eq!(clean_token("Mām,"), "mām");
        assert_eq!(clean_token("śucaḥ॥"), "śucaḥ");
        assert_eq!(clean_token("“vraja”"), "vraja");
        assert_eq!(clean_token("।"), "");
    }

    #[test]
    fn folding_removes_diacritics() {
        assert_eq!(fold_diacritics("mokṣayiṣyāmi"), "moksayisyami");
        assert_eq!(fold_diacritics("śaraṇaṁ"), "saranam");
        // Decomposed a + combining macron.
        assert_eq!(fold_diacritics("ma\u{0304}m"), "mam");
    }
}
