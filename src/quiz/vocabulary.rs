use std::collections::HashSet;

use thiserror::Error;

/// The months in calendar order, English paired with the Sino-Korean month name.
pub const MONTHS: &[(&str, &str)] = &[
    ("January", "일월"),
    ("February", "이월"),
    ("March", "삼월"),
    ("April", "사월"),
    ("May", "오월"),
    ("June", "유월"),
    ("July", "칠월"),
    ("August", "팔월"),
    ("September", "구월"),
    ("October", "시월"),
    ("November", "십일월"),
    ("December", "십이월"),
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VocabularyEntry {
    pub english: String,
    pub korean: String,
}

impl VocabularyEntry {
    pub fn new(english: &str, korean: &str) -> Self {
        Self {
            english: english.to_string(),
            korean: korean.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("vocabulary must contain at least one entry")]
    Empty,
    #[error("duplicate English term {0:?}")]
    DuplicateEnglish(String),
    #[error("duplicate Korean term {0:?}")]
    DuplicateKorean(String),
}

/// Ordered table of language pairs. Terms are unique per language so that a
/// term identifies its entry in either direction.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    pub fn new(entries: Vec<VocabularyEntry>) -> Result<Self, VocabularyError> {
        if entries.is_empty() {
            return Err(VocabularyError::Empty);
        }

        let mut english = HashSet::new();
        let mut korean = HashSet::new();
        for entry in &entries {
            if !english.insert(entry.english.as_str()) {
                return Err(VocabularyError::DuplicateEnglish(entry.english.clone()));
            }
            if !korean.insert(entry.korean.as_str()) {
                return Err(VocabularyError::DuplicateKorean(entry.korean.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn months() -> Self {
        Self {
            entries: MONTHS
                .iter()
                .map(|(en, ko)| VocabularyEntry::new(en, ko))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn english_terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.english.as_str())
    }

    pub fn korean_terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.korean.as_str())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::months()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_are_in_calendar_order() {
        let vocab = Vocabulary::months();
        assert_eq!(vocab.len(), 12);
        assert_eq!(vocab.entries()[0], VocabularyEntry::new("January", "일월"));
        assert_eq!(vocab.entries()[5].korean, "유월");
        assert_eq!(vocab.entries()[9].korean, "시월");
        assert_eq!(vocab.entries()[11].english, "December");
    }

    #[test]
    fn months_pass_validation() {
        let entries = Vocabulary::months().entries().to_vec();
        assert!(Vocabulary::new(entries).is_ok());
    }

    #[test]
    fn rejects_duplicate_terms() {
        let dup_en = vec![
            VocabularyEntry::new("May", "오월"),
            VocabularyEntry::new("May", "유월"),
        ];
        assert_eq!(
            Vocabulary::new(dup_en).unwrap_err(),
            VocabularyError::DuplicateEnglish("May".to_string())
        );

        let dup_ko = vec![
            VocabularyEntry::new("May", "오월"),
            VocabularyEntry::new("June", "오월"),
        ];
        assert_eq!(
            Vocabulary::new(dup_ko).unwrap_err(),
            VocabularyError::DuplicateKorean("오월".to_string())
        );
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(Vocabulary::new(Vec::new()).unwrap_err(), VocabularyError::Empty);
    }
}
