pub mod distractor;
pub mod generator;
pub mod question;
pub mod result;
pub mod run;
pub mod shuffle;
pub mod vocabulary;

pub use generator::{Direction, DirectionMode, Question, QuizGenerator};
pub use question::{QuestionSession, build_session};
pub use run::{AnswerOutcome, CorrectedAnswer, QuizOptions, QuizRun, QuizStatus};
pub use vocabulary::{Vocabulary, VocabularyEntry, VocabularyError};
