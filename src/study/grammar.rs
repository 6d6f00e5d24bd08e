//! Grammar reference content and plain-English explanations for word entries.

use crate::api::Word;

/// Readable gloss of a word's tense, case and root, if any are known.
pub fn plain_explanation(word: &Word) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(tense) = word.tense.as_deref().map(str::to_lowercase) {
        let gloss = if tense.contains("imperative") {
            Some("This is a command form: someone is directly telling someone else to do something.")
        } else if tense.contains("future") {
            Some("This is future tense. It describes something that will happen.")
        } else if tense.contains("present") {
            Some("This is present tense. It describes an action happening now.")
        } else if tense.contains("past") || tense.contains("participle") {
            Some("This is a past form. It describes an action that has already been done.")
        } else {
            None
        };
        parts.extend(gloss.map(str::to_string));
    }

    if let Some(case) = word.grammatical_case.as_deref().map(str::to_lowercase) {
        let gloss = [
            ("accusative", "The accusative case means this word is the object, the one receiving the action."),
            ("nominative", "The nominative case means this word is the subject, the one doing the action."),
            ("instrumental", "The instrumental case means \"by\" or \"with\". It tells how the action is done."),
            ("dative", "The dative case means \"to\" or \"for\". It tells who benefits from the action."),
            ("ablative", "The ablative case means \"from\". It shows the source or origin."),
            ("genitive", "The genitive case means \"of\". It shows possession or belonging."),
            ("locative", "The locative case means \"in\" or \"at\". It tells where something happens."),
            ("vocative", "The vocative case is used for direct address, calling out to someone."),
        ]
        .into_iter()
        .find(|(name, _)| case.contains(name))
        .map(|(_, gloss)| gloss.to_string());
        parts.extend(gloss);
    }

    if let Some(root) = word.root.as_deref().filter(|root| !root.trim().is_empty()) {
        parts.push(format!("This word comes from the root \"{root}\"."));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Labelled attribute rows for the grammar modal, skipping unknowns.
pub fn word_details(word: &Word) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    let optional = [
        ("Root", &word.root),
        ("Case", &word.grammatical_case),
        ("Number", &word.number),
        ("Tense / Mood", &word.tense),
    ];
    for (label, value) in optional {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            rows.push((label, value.to_string()));
        }
    }
    rows.push(("Meaning", word.meaning.clone()));
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimerEntry {
    pub term: &'static str,
    pub sanskrit: Option<&'static str>,
    pub explanation: &'static str,
    pub verse_example: Option<&'static str>,
}

pub static GRAMMAR_PRIMER: [PrimerEntry; 8] = [
    PrimerEntry {
        term: "Verb Root (Dhatu)",
        sanskrit: Some("धातु"),
        explanation: "A verb root is the most basic form of a verb, the seed from which different verb forms grow. In English, think of \"go\" as a root that becomes \"goes\", \"going\", \"went\". In Sanskrit, \"muc\" (to release) is the root behind \"moksayisyami\" (I will release).",
        verse_example: Some("In this verse, \"tyaj\" (to abandon) is the root behind \"parityajya\" (having abandoned)."),
    },
    PrimerEntry {
        term: "Grammatical Case",
        sanskrit: Some("विभक्ति"),
        explanation: "A case tells you the role a word plays in a sentence: is it the doer, the receiver, or something else? English uses word order (\"The dog bit the man\" vs \"The man bit the dog\"). Sanskrit uses case endings instead, so word order is flexible.",
        verse_example: Some("\"mam\" is in the accusative case, meaning it is the object, the one receiving the action. Krishna is saying \"come to Me\". He is the destination."),
    },
    PrimerEntry {
        term: "1st Person",
        sanskrit: None,
        explanation: "First person means \"I\" or \"we\": the speaker is talking about themselves. When you see a 1st-person verb, the speaker is the one doing the action.",
        verse_example: Some("\"moksayisyami\" is 1st person. Krishna Himself is saying \"I will release you.\" He is personally making this promise."),
    },
    PrimerEntry {
        term: "2nd Person",
        sanskrit: None,
        explanation: "Second person means \"you\": the speaker is addressing someone directly. When you see a 2nd-person verb or pronoun, someone is being spoken to.",
        verse_example: Some("\"tvam\" (you) is 2nd person. Krishna is directly addressing Arjuna. \"vraja\" (go/surrender) is also 2nd person, a direct instruction to Arjuna."),
    },
    PrimerEntry {
        term: "Masculine / Feminine / Neuter",
        sanskrit: None,
        explanation: "In Sanskrit, every noun has a gender: masculine, feminine, or neuter. This is a grammatical property, not always about actual gender. The gender affects which endings the word takes.",
        verse_example: Some("\"dharma\" is masculine. \"sarana\" (shelter) is neuter. The endings change depending on gender and case."),
    },
    PrimerEntry {
        term: "Past Participle",
        sanskrit: Some("क्त / क्तवतु"),
        explanation: "A past participle describes an action that has already been completed. In English: \"abandoned\", \"spoken\", \"done\". In Sanskrit, these forms often end in -ta or -na.",
        verse_example: Some("\"parityajya\" uses a related form meaning \"having abandoned\". The action of abandoning comes first, then the next action follows."),
    },
    PrimerEntry {
        term: "Imperative",
        sanskrit: Some("लोट्"),
        explanation: "The imperative is a command form. Someone is directly telling someone else to do something. No \"please\" or \"maybe\": it is a direct instruction.",
        verse_example: Some("\"vraja\" (surrender / go) is imperative. Krishna is directly commanding Arjuna: \"Surrender unto Me!\" It carries authority and urgency."),
    },
    PrimerEntry {
        term: "Future Tense",
        sanskrit: Some("लृट्"),
        explanation: "Future tense means \"I will do\" or \"it will happen.\" It describes an action that has not happened yet but is promised or expected.",
        verse_example: Some("\"moksayisyami\" is future tense: \"I will liberate.\" Krishna is making a personal promise about what He will do."),
    },
];

/// One row of an inflection table: label, singular, dual, plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRow {
    pub label: &'static str,
    pub forms: [&'static str; 3],
    pub usage: Option<&'static str>,
}

const fn row(label: &'static str, forms: [&'static str; 3], usage: Option<&'static str>) -> FormRow {
    FormRow {
        label,
        forms,
        usage,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTable {
    pub title: &'static str,
    pub rows: &'static [FormRow],
}

pub static KRSNA_DECLENSION: FormTable = FormTable {
    title: "Noun Declension: Kṛṣṇa (masculine, a-stem)",
    rows: &[
        row("Nominative", ["Kṛṣṇaḥ", "Kṛṣṇau", "Kṛṣṇāḥ"], Some("The doer: \"Kṛṣṇa speaks\"")),
        row("Accusative", ["Kṛṣṇam", "Kṛṣṇau", "Kṛṣṇān"], Some("The receiver: \"I see Kṛṣṇa\"")),
        row("Instrumental", ["Kṛṣṇena", "Kṛṣṇābhyām", "Kṛṣṇaiḥ"], Some("By/with: \"with Kṛṣṇa\"")),
        row("Dative", ["Kṛṣṇāya", "Kṛṣṇābhyām", "Kṛṣṇebhyaḥ"], Some("For/to: \"for Kṛṣṇa\"")),
        row("Ablative", ["Kṛṣṇāt", "Kṛṣṇābhyām", "Kṛṣṇebhyaḥ"], Some("From: \"from Kṛṣṇa\"")),
        row("Genitive", ["Kṛṣṇasya", "Kṛṣṇayoḥ", "Kṛṣṇānām"], Some("Of/belonging to: \"of Kṛṣṇa\"")),
        row("Locative", ["Kṛṣṇe", "Kṛṣṇayoḥ", "Kṛṣṇeṣu"], Some("In/on: \"in Kṛṣṇa\"")),
        row("Vocative", ["Kṛṣṇa!", "Kṛṣṇau!", "Kṛṣṇāḥ!"], Some("Calling: \"O Kṛṣṇa!\"")),
    ],
};

pub static BHU_CONJUGATIONS: [FormTable; 3] = [
    FormTable {
        title: "Present Tense (Laṭ Lakāra)",
        rows: &[
            row("3rd Person (he/she/it)", ["bhavati", "bhavataḥ", "bhavanti"], None),
            row("2nd Person (you)", ["bhavasi", "bhavathaḥ", "bhavatha"], None),
            row("1st Person (I/we)", ["bhavāmi", "bhavāvaḥ", "bhavāmaḥ"], None),
        ],
    },
    FormTable {
        title: "Imperative (Loṭ Lakāra)",
        rows: &[
            row("3rd Person", ["bhavatu", "bhavatām", "bhavantu"], None),
            row("2nd Person", ["bhava", "bhavatam", "bhavata"], None),
            row("1st Person", ["bhavāni", "bhavāva", "bhavāma"], None),
        ],
    },
    FormTable {
        title: "Future Tense (Lṛṭ Lakāra)",
        rows: &[
            row("3rd Person", ["bhaviṣyati", "bhaviṣyataḥ", "bhaviṣyanti"], None),
            row("2nd Person", ["bhaviṣyasi", "bhaviṣyathaḥ", "bhaviṣyatha"], None),
            row("1st Person", ["bhaviṣyāmi", "bhaviṣyāvaḥ", "bhaviṣyāmaḥ"], None),
        ],
    },
];

/// Short reference cards on the conjugations page.
pub static KEY_CONCEPTS: [(&str, &str); 7] = [
    ("1st Person", "First person means \"I\" or \"we.\" The speaker is talking about themselves. When you see a 1st-person verb, the speaker is the one doing the action."),
    ("2nd Person", "Second person means \"you.\" The speaker is addressing someone directly. In the Gita, Krishna often uses 2nd person when speaking to Arjuna."),
    ("3rd Person", "Third person means \"he,\" \"she,\" \"it,\" or \"they.\" The speaker is talking about someone else. Most narrative descriptions use 3rd person."),
    ("Masculine / Feminine / Neuter", "Every Sanskrit noun has a grammatical gender. This affects which endings the word takes. \"Dharma\" is masculine, \"vidyā\" is feminine, \"jñāna\" (knowledge) is neuter."),
    ("Past Participle", "A past participle describes a completed action, like \"spoken,\" \"done,\" or \"abandoned\" in English. In Sanskrit, these often end in -ta or -na. Example: kṛta = done."),
    ("Imperative", "The imperative is a command form. Someone is directly telling someone else to do something. \"vraja\" (surrender!) in BG 18.66 is imperative. It carries authority."),
    ("Future Tense", "Future tense means \"I will do\" or \"it will happen.\" In BG 18.66, \"mokṣayiṣyāmi\" (I will liberate) is future tense, Krishna making a personal promise."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explanation_combines_tense_case_and_root() {
        let word = Word {
            tense: Some("Future, 1st person".to_string()),
            grammatical_case: Some("Accusative".to_string()),
            root: Some("muc".to_string()),
            ..Word::default()
        };
        let text = plain_explanation(&word).expect("explanation");
        assert!(text.starts_with("This is future tense."));
        assert!(text.contains("accusative case"));
        assert!(text.ends_with("root \"muc\"."));
    }

    #[test]
    fn imperative_wins_over_present() {
        let word = Word {
            tense: Some("present imperative".to_string()),
            ..Word::default()
        };
        let text = plain_explanation(&word).expect("explanation");
        assert!(text.starts_with("This is a command form"));
    }

    #[test]
    fn bare_word_has_no_explanation() {
        assert_eq!(plain_explanation(&Word::default()), None);
    }

    #[test]
    fn details_skip_missing_attributes() {
        let word = Word {
            number: Some("singular".to_string()),
            meaning: "Me".to_string(),
            ..Word::default()
        };
        assert_eq!(
            word_details(&word),
            vec![("Number", "singular".to_string()), ("Meaning", "Me".to_string())]
        );
    }

    #[test]
    fn tables_have_three_numbers_per_row() {
        assert_eq!(KRSNA_DECLENSION.rows.len(), 8);
        for table in BHU_CONJUGATIONS.iter() {
            assert_eq!(table.rows.len(), 3);
        }
    }
}
