use crate::quiz::run::{CorrectedAnswer, QuizRun};

/// End-of-run report shown on the summary screen.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    /// Answered without any miss.
    pub first_try: usize,
    pub corrected: Vec<CorrectedAnswer>,
    pub elapsed_secs: f64,
    /// False when the learner left before the last question.
    pub completed: bool,
}

impl QuizSummary {
    pub fn from_run(run: &QuizRun) -> Self {
        let corrected = run.corrected_answers();
        // A question in progress with misses is listed but not yet scored.
        let missed_and_scored = run
            .sessions()
            .iter()
            .take(run.score())
            .filter(|s| s.had_wrong_attempt)
            .count();

        Self {
            score: run.score(),
            total: run.total(),
            first_try: run.score() - missed_and_scored,
            corrected,
            elapsed_secs: run.elapsed_secs(),
            completed: run.is_finished(),
        }
    }

    pub fn accuracy(&self) -> f64 {
        if self.score == 0 {
            return 0.0;
        }
        self.first_try as f64 / self.score as f64 * 100.0
    }
}
