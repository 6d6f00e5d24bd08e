use serde::{Deserialize, Serialize};

/// Which scripture a verse row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceText {
    #[default]
    Gita,
    Noi,
}

impl SourceText {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gita" | "bg" => Some(Self::Gita),
            "noi" => Some(Self::Noi),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gita => "gita",
            Self::Noi => "noi",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Gita => "Bhagavad-gita",
            Self::Noi => "Nectar of Instruction",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Verse {
    pub id: String,
    pub chapter: u32,
    pub verse: u32,
    #[serde(default)]
    pub devanagari: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub grammar_focus: Option<String>,
    #[serde(default)]
    pub source_text: Option<String>,
}

impl Verse {
    /// Rows without a recognised source are Gita verses.
    pub fn source(&self) -> SourceText {
        self.source_text
            .as_deref()
            .and_then(SourceText::parse)
            .unwrap_or_default()
    }
}

/// One word of a verse with its grammatical analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Word {
    pub id: String,
    #[serde(default)]
    pub verse_id: String,
    pub word: String,
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub grammatical_case: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub tense: Option<String>,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub grammar_note: Option<String>,
    #[serde(default)]
    pub root_id: Option<String>,
    #[serde(default)]
    pub spiritual_insight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Commentary {
    pub id: String,
    #[serde(default)]
    pub verse_id: String,
    pub acharya: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_phrases: Vec<String>,
}

/// Row inserted when a signed-in user starts listening to a verse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenEvent {
    pub user_id: String,
    pub chapter: u32,
    pub verse: u32,
    pub track_type: String,
}

/// Signed-in user as returned by the backend's auth endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_rows_tolerate_missing_optional_columns() {
        let json = r#"{"id":"v-1","chapter":18,"verse":66,"devanagari":"सर्व","transliteration":"sarva","translation":"Abandon"}"#;
        let verse: Verse = serde_json::from_str(json).expect("verse row");
        assert_eq!(verse.chapter, 18);
        assert_eq!(verse.grammar_focus, None);
        assert_eq!(verse.source(), SourceText::Gita);
    }

    #[test]
    fn unknown_source_falls_back_to_gita() {
        let verse = Verse {
            source_text: Some("noi".to_string()),
            ..Verse::default()
        };
        assert_eq!(verse.source(), SourceText::Noi);
        let verse = Verse {
            source_text: Some("upanishad".to_string()),
            ..Verse::default()
        };
        assert_eq!(verse.source(), SourceText::Gita);
    }

    #[test]
    fn commentary_key_phrases_default_to_empty() {
        let json = r#"{"id":"c-1","acharya":"Śrīla Prabhupāda","summary":"Surrender"}"#;
        let commentary: Commentary = serde_json::from_str(json).expect("commentary row");
        assert!(commentary.key_phrases.is_empty());
    }
}
