use std::time::Instant;

use rand::Rng;
use tracing::{info, trace};

use crate::quiz::distractor::DistractorSelector;
use crate::quiz::generator::{DirectionMode, QuizGenerator};
use crate::quiz::question::{DEFAULT_DISTRACTORS, QuestionSession, build_session};
use crate::quiz::result::QuizSummary;
use crate::quiz::vocabulary::Vocabulary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizStatus {
    Playing,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// Submitted after the run finished; nothing changed.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrectedAnswer {
    pub prompt: String,
    pub correct: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizOptions {
    pub question_count: usize,
    pub distractor_count: usize,
    pub direction_mode: DirectionMode,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            question_count: 12,
            distractor_count: DEFAULT_DISTRACTORS,
            direction_mode: DirectionMode::Mixed,
        }
    }
}

pub struct QuizRun {
    sessions: Vec<QuestionSession>,
    current_index: usize,
    score: usize,
    status: QuizStatus,
    pub started_at: Instant,
    pub finished_at: Option<Instant>,
}

impl QuizRun {
    /// Start a run over prebuilt sessions. An empty run is finished from the start.
    pub fn new(sessions: Vec<QuestionSession>) -> Self {
        let now = Instant::now();
        let (status, finished_at) = if sessions.is_empty() {
            (QuizStatus::Finished, Some(now))
        } else {
            (QuizStatus::Playing, None)
        };
        Self {
            sessions,
            current_index: 0,
            score: 0,
            status,
            started_at: now,
            finished_at,
        }
    }

    /// Build questions and their sessions up front.
    pub fn generate<R: Rng + ?Sized>(
        vocabulary: &Vocabulary,
        options: &QuizOptions,
        rng: &mut R,
    ) -> Self {
        let generator = QuizGenerator::new(vocabulary, options.direction_mode);
        let selector = DistractorSelector::new(vocabulary);
        let sessions: Vec<QuestionSession> = generator
            .build_quiz(options.question_count, rng)
            .into_iter()
            .map(|q| build_session(q, &selector, options.distractor_count, rng))
            .collect();

        info!(
            questions = sessions.len(),
            distractors = options.distractor_count,
            mode = %options.direction_mode,
            "quiz started"
        );
        Self::new(sessions)
    }

    pub fn submit_answer(&mut self, choice: &str) -> AnswerOutcome {
        if self.status == QuizStatus::Finished {
            return AnswerOutcome::Ignored;
        }
        let Some(session) = self.sessions.get_mut(self.current_index) else {
            return AnswerOutcome::Ignored;
        };

        if session.is_correct(choice) {
            trace!(question = self.current_index, choice, "correct");
            self.score += 1;
            if self.current_index + 1 == self.sessions.len() {
                self.status = QuizStatus::Finished;
                self.finished_at = Some(Instant::now());
                info!(score = self.score, total = self.sessions.len(), "quiz finished");
            } else {
                self.current_index += 1;
            }
            AnswerOutcome::Correct
        } else {
            trace!(question = self.current_index, choice, "incorrect");
            session.reject(choice);
            AnswerOutcome::Incorrect
        }
    }

    /// The question being asked. Stays on the last question once finished.
    pub fn current(&self) -> Option<&QuestionSession> {
        self.sessions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn status(&self) -> QuizStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == QuizStatus::Finished
    }

    pub fn total(&self) -> usize {
        self.sessions.len()
    }

    pub fn sessions(&self) -> &[QuestionSession] {
        &self.sessions
    }

    pub fn elapsed_secs(&self) -> f64 {
        match self.finished_at {
            Some(end) => end.duration_since(self.started_at).as_secs_f64(),
            None => self.started_at.elapsed().as_secs_f64(),
        }
    }

    /// Questions that needed at least one retry, in quiz order.
    pub fn corrected_answers(&self) -> Vec<CorrectedAnswer> {
        self.sessions
            .iter()
            .filter(|s| s.had_wrong_attempt)
            .map(|s| CorrectedAnswer {
                prompt: s.question.prompt.clone(),
                correct: s.correct_choice().to_string(),
            })
            .collect()
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary::from_run(self)
    }
}
