use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::quiz::shuffle::shuffle;
use crate::quiz::vocabulary::{Vocabulary, VocabularyEntry};

/// Which term is shown in the prompt and which language the answer is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    KoreanToEnglish,
    EnglishToKorean,
}

impl Direction {
    pub fn target_language(self) -> &'static str {
        match self {
            Direction::KoreanToEnglish => "English",
            Direction::EnglishToKorean => "Korean",
        }
    }

    pub fn prompt_term(self, entry: &VocabularyEntry) -> &str {
        match self {
            Direction::KoreanToEnglish => &entry.korean,
            Direction::EnglishToKorean => &entry.english,
        }
    }
}

/// How directions are assigned when building a quiz.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionMode {
    /// Each question independently picks a direction, 50/50.
    #[default]
    #[serde(rename = "mixed")]
    Mixed,
    #[serde(rename = "ko-en")]
    KoreanToEnglish,
    #[serde(rename = "en-ko")]
    EnglishToKorean,
}

impl DirectionMode {
    pub const ALL: [DirectionMode; 3] = [
        DirectionMode::Mixed,
        DirectionMode::KoreanToEnglish,
        DirectionMode::EnglishToKorean,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DirectionMode::Mixed => "mixed",
            DirectionMode::KoreanToEnglish => "ko-en",
            DirectionMode::EnglishToKorean => "en-ko",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DirectionMode::Mixed => "Mixed",
            DirectionMode::KoreanToEnglish => "Korean → English",
            DirectionMode::EnglishToKorean => "English → Korean",
        }
    }

    fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> Direction {
        match self {
            DirectionMode::Mixed => {
                if rng.gen_bool(0.5) {
                    Direction::KoreanToEnglish
                } else {
                    Direction::EnglishToKorean
                }
            }
            DirectionMode::KoreanToEnglish => Direction::KoreanToEnglish,
            DirectionMode::EnglishToKorean => Direction::EnglishToKorean,
        }
    }
}

impl fmt::Display for DirectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown direction {0:?} (expected mixed, ko-en or en-ko)")]
pub struct ParseDirectionError(String);

impl FromStr for DirectionMode {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DirectionMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    /// Position within the quiz, 0-based.
    pub id: usize,
    pub prompt: String,
    pub correct_english: String,
    pub correct_korean: String,
    pub direction: Direction,
}

impl Question {
    pub fn new(id: usize, entry: &VocabularyEntry, direction: Direction) -> Self {
        let prompt = format!(
            "What is \"{}\" in {}?",
            direction.prompt_term(entry),
            direction.target_language()
        );
        Self {
            id,
            prompt,
            correct_english: entry.english.clone(),
            correct_korean: entry.korean.clone(),
            direction,
        }
    }

    /// The answer string that must be picked for this question.
    pub fn correct_choice(&self) -> &str {
        match self.direction {
            Direction::KoreanToEnglish => &self.correct_english,
            Direction::EnglishToKorean => &self.correct_korean,
        }
    }
}

pub struct QuizGenerator<'a> {
    vocabulary: &'a Vocabulary,
    direction_mode: DirectionMode,
}

impl<'a> QuizGenerator<'a> {
    pub fn new(vocabulary: &'a Vocabulary, direction_mode: DirectionMode) -> Self {
        Self {
            vocabulary,
            direction_mode,
        }
    }

    /// Draw `count` distinct entries in random order. Requests larger than the
    /// table are capped at the table size.
    pub fn build_quiz<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Question> {
        let available = self.vocabulary.len();
        if count > available {
            debug!(requested = count, available, "question count capped");
        }

        let questions: Vec<Question> = shuffle(self.vocabulary.entries(), rng)
            .iter()
            .take(count)
            .enumerate()
            .map(|(id, entry)| Question::new(id, entry, self.direction_mode.pick(rng)))
            .collect();

        debug!(
            count = questions.len(),
            mode = %self.direction_mode,
            "built quiz"
        );
        questions
    }
}
