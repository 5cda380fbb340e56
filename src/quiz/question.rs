use rand::Rng;

use crate::quiz::distractor::DistractorSelector;
use crate::quiz::generator::Question;
use crate::quiz::shuffle::shuffle;

pub const DEFAULT_DISTRACTORS: usize = 3;

/// Live state of one question: the choices still on screen and whether the
/// learner has missed it at least once.
#[derive(Clone, Debug)]
pub struct QuestionSession {
    pub question: Question,
    pub choices: Vec<String>,
    pub had_wrong_attempt: bool,
}

impl QuestionSession {
    pub fn correct_choice(&self) -> &str {
        self.question.correct_choice()
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_choice()
    }

    /// Record a miss. The choice is dropped if present; the flag is set either way.
    pub fn reject(&mut self, choice: &str) {
        if let Some(pos) = self.choices.iter().position(|c| c == choice) {
            self.choices.remove(pos);
        }
        self.had_wrong_attempt = true;
    }
}

pub fn build_session<R: Rng + ?Sized>(
    question: Question,
    selector: &DistractorSelector<'_>,
    distractor_count: usize,
    rng: &mut R,
) -> QuestionSession {
    let wrong = selector.wrong_choices(
        &question.correct_english,
        &question.correct_korean,
        question.direction,
        distractor_count,
        rng,
    );

    let mut choices = Vec::with_capacity(wrong.len() + 1);
    choices.push(question.correct_choice().to_string());
    choices.extend(wrong);

    QuestionSession {
        choices: shuffle(&choices, rng),
        question,
        had_wrong_attempt: false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::quiz::generator::Direction;
    use crate::quiz::vocabulary::{Vocabulary, VocabularyEntry};

    fn session_for(english: &str, korean: &str, direction: Direction, seed: u64) -> QuestionSession {
        let vocab = Vocabulary::months();
        let selector = DistractorSelector::new(&vocab);
        let question = Question::new(0, &VocabularyEntry::new(english, korean), direction);
        build_session(
            question,
            &selector,
            DEFAULT_DISTRACTORS,
            &mut SmallRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn four_unique_choices_with_one_correct() {
        for seed in 0..50 {
            let session = session_for("April", "사월", Direction::EnglishToKorean, seed);
            assert_eq!(session.choices.len(), 4);
            let unique: HashSet<&String> = session.choices.iter().collect();
            assert_eq!(unique.len(), 4);
            assert_eq!(session.choices.iter().filter(|c| *c == "사월").count(), 1);
            assert!(!session.had_wrong_attempt);
        }
    }

    #[test]
    fn correct_choice_lands_in_every_slot() {
        let mut slots = HashSet::new();
        for seed in 0..200 {
            let session = session_for("July", "칠월", Direction::KoreanToEnglish, seed);
            slots.insert(session.choices.iter().position(|c| c == "July"));
        }
        assert_eq!(slots.len(), 4);
    }

    #[test]
    fn reject_removes_only_the_wrong_choice() {
        let mut session = session_for("July", "칠월", Direction::KoreanToEnglish, 8);
        let wrong = session
            .choices
            .iter()
            .find(|c| *c != "July")
            .cloned()
            .unwrap();

        session.reject(&wrong);
        assert_eq!(session.choices.len(), 3);
        assert!(!session.choices.contains(&wrong));
        assert!(session.choices.iter().any(|c| c == "July"));
        assert!(session.had_wrong_attempt);
    }

    #[test]
    fn reject_of_unknown_choice_only_sets_flag() {
        let mut session = session_for("July", "칠월", Direction::KoreanToEnglish, 8);
        let before = session.choices.clone();
        session.reject("Smarch");
        assert_eq!(session.choices, before);
        assert!(session.had_wrong_attempt);
    }

    #[test]
    fn single_entry_vocabulary_has_only_the_answer() {
        let vocab = Vocabulary::new(vec![VocabularyEntry::new("January", "일월")]).unwrap();
        let selector = DistractorSelector::new(&vocab);
        let question = Question::new(0, &vocab.entries()[0], Direction::KoreanToEnglish);
        let session = build_session(question, &selector, 3, &mut SmallRng::seed_from_u64(0));
        assert_eq!(session.choices, vec!["January".to_string()]);
    }
}
