use rand::Rng;
use tracing::debug;

use crate::quiz::generator::Direction;
use crate::quiz::shuffle::shuffle;
use crate::quiz::vocabulary::Vocabulary;

/// Picks wrong answers from the answer-language terms of a vocabulary.
pub struct DistractorSelector<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> DistractorSelector<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Up to `count` distinct terms in the answer language, never the correct
    /// one. Returns the whole pool when it holds fewer than `count` terms.
    pub fn wrong_choices<R: Rng + ?Sized>(
        &self,
        correct_english: &str,
        correct_korean: &str,
        direction: Direction,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let pool: Vec<&str> = match direction {
            Direction::KoreanToEnglish => self
                .vocabulary
                .english_terms()
                .filter(|en| *en != correct_english)
                .collect(),
            Direction::EnglishToKorean => self
                .vocabulary
                .korean_terms()
                .filter(|ko| *ko != correct_korean)
                .collect(),
        };

        if count > pool.len() {
            debug!(requested = count, available = pool.len(), "distractor pool exhausted");
        }

        shuffle(&pool, rng)
            .into_iter()
            .take(count)
            .map(str::to_string)
            .collect()
    }
}
