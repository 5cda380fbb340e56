use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use tracing::{debug, warn};

use crate::config::{Config, MAX_DISTRACTORS};
use crate::quiz::result::QuizSummary;
use crate::quiz::vocabulary::MONTHS;
use crate::quiz::{AnswerOutcome, DirectionMode, QuizRun, Vocabulary};
use crate::ui::components::menu::{Menu, MenuAction};
use crate::ui::theme::Theme;

const WRONG_FLASH_DURATION: Duration = Duration::from_millis(1200);

pub const SETTINGS_FIELDS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    Quiz,
    Summary,
    Settings,
}

/// The last wrong pick, shown until it times out or the learner answers again.
pub struct WrongFlash {
    pub choice: String,
    pub at: Instant,
}

pub struct App {
    pub screen: AppScreen,
    pub menu: Menu<'static>,
    pub theme: &'static Theme,
    pub config: Config,
    pub vocabulary: Vocabulary,
    pub run: Option<QuizRun>,
    pub summary: Option<QuizSummary>,
    pub selected_choice: usize,
    pub wrong_flash: Option<WrongFlash>,
    pub settings_selected: usize,
    /// Set once a setting is changed; CLI overrides alone are never saved.
    pub settings_dirty: bool,
    pub should_quit: bool,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config, theme: &'static Theme, rng: SmallRng) -> Self {
        Self {
            screen: AppScreen::Menu,
            menu: Menu::new(theme),
            theme,
            config,
            vocabulary: Vocabulary::months(),
            run: None,
            summary: None,
            selected_choice: 0,
            wrong_flash: None,
            settings_selected: 0,
            settings_dirty: false,
            should_quit: false,
            rng,
        }
    }

    pub fn activate(&mut self, action: MenuAction) {
        match action {
            MenuAction::StartQuiz => self.start_quiz(),
            MenuAction::Settings => self.go_to_settings(),
            MenuAction::Quit => self.should_quit = true,
        }
    }

    /// Discard any run in progress and start a fresh one.
    pub fn start_quiz(&mut self) {
        let options = self.config.quiz_options();
        self.run = Some(QuizRun::generate(&self.vocabulary, &options, &mut self.rng));
        self.summary = None;
        self.selected_choice = 0;
        self.wrong_flash = None;
        self.screen = AppScreen::Quiz;
        self.finish_if_done();
    }

    /// Answer with the `index`-th visible choice (0-based).
    pub fn choose(&mut self, index: usize) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        let Some(choice) = run.current().and_then(|s| s.choices.get(index)).cloned() else {
            return;
        };

        match run.submit_answer(&choice) {
            AnswerOutcome::Correct => {
                self.wrong_flash = None;
                self.selected_choice = 0;
            }
            AnswerOutcome::Incorrect => {
                let remaining = run.current().map_or(1, |s| s.choices.len());
                self.selected_choice = self.selected_choice.min(remaining.saturating_sub(1));
                self.wrong_flash = Some(WrongFlash {
                    choice,
                    at: Instant::now(),
                });
            }
            AnswerOutcome::Ignored => {}
        }
        self.finish_if_done();
    }

    pub fn choose_selected(&mut self) {
        self.choose(self.selected_choice);
    }

    pub fn select_next(&mut self) {
        let count = self.visible_choice_count();
        if count > 0 {
            self.selected_choice = (self.selected_choice + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.visible_choice_count();
        if count > 0 {
            self.selected_choice = (self.selected_choice + count - 1) % count;
        }
    }

    fn visible_choice_count(&self) -> usize {
        self.run
            .as_ref()
            .and_then(|r| r.current())
            .map_or(0, |s| s.choices.len())
    }

    fn finish_if_done(&mut self) {
        if let Some(run) = self.run.as_ref().filter(|r| r.is_finished()) {
            self.summary = Some(run.summary());
            self.wrong_flash = None;
            self.screen = AppScreen::Summary;
        }
    }

    /// Leave the quiz early. Shows a partial summary once anything was answered.
    pub fn abandon_quiz(&mut self) {
        let answered = self
            .run
            .as_ref()
            .is_some_and(|r| r.score() > 0 || r.current().is_some_and(|s| s.had_wrong_attempt));
        if !answered {
            self.go_to_menu();
            return;
        }
        if let Some(run) = self.run.as_ref() {
            debug!(score = run.score(), total = run.total(), "quiz abandoned");
            self.summary = Some(run.summary());
            self.wrong_flash = None;
            self.screen = AppScreen::Summary;
        }
    }

    pub fn on_tick(&mut self) {
        if self
            .wrong_flash
            .as_ref()
            .is_some_and(|f| f.at.elapsed() > WRONG_FLASH_DURATION)
        {
            self.wrong_flash = None;
        }
    }

    pub fn go_to_menu(&mut self) {
        self.screen = AppScreen::Menu;
        self.run = None;
        self.wrong_flash = None;
    }

    pub fn go_to_settings(&mut self) {
        self.settings_selected = 0;
        self.settings_dirty = false;
        self.screen = AppScreen::Settings;
    }

    pub fn leave_settings(&mut self) {
        if self.settings_dirty {
            if let Err(err) = self.config.save() {
                warn!(%err, "could not save settings");
            }
            self.settings_dirty = false;
        }
        self.go_to_menu();
    }

    pub fn settings_fields(&self) -> [(&'static str, String); SETTINGS_FIELDS] {
        [
            ("Questions", self.config.question_count.to_string()),
            ("Wrong choices", self.config.distractor_count.to_string()),
            ("Direction", self.config.direction.label().to_string()),
            ("Theme", self.config.theme.clone()),
        ]
    }

    pub fn settings_cycle_forward(&mut self) {
        self.settings_cycle(true);
    }

    pub fn settings_cycle_backward(&mut self) {
        self.settings_cycle(false);
    }

    fn settings_cycle(&mut self, forward: bool) {
        let months = MONTHS.len();
        self.settings_dirty = true;
        match self.settings_selected {
            0 => {
                let idx = self.config.question_count.saturating_sub(1);
                self.config.question_count = cycle_index(idx, months, forward) + 1;
            }
            1 => {
                let idx = self.config.distractor_count.saturating_sub(1);
                let len = MAX_DISTRACTORS.min(months - 1);
                self.config.distractor_count = cycle_index(idx, len, forward) + 1;
            }
            2 => {
                let modes = DirectionMode::ALL;
                let idx = modes
                    .iter()
                    .position(|m| *m == self.config.direction)
                    .unwrap_or(0);
                self.config.direction = modes[cycle_index(idx, modes.len(), forward)];
            }
            3 => {
                let themes = Theme::available_themes();
                if themes.is_empty() {
                    return;
                }
                let next = match themes.iter().position(|t| *t == self.config.theme) {
                    Some(idx) => cycle_index(idx, themes.len(), forward),
                    None => 0,
                };
                self.config.theme = themes[next].clone();
                if let Some(new_theme) = Theme::load(&self.config.theme) {
                    let theme: &'static Theme = Box::leak(Box::new(new_theme));
                    self.theme = theme;
                    self.menu.theme = theme;
                }
            }
            _ => {}
        }
    }
}

fn cycle_index(idx: usize, len: usize, forward: bool) -> usize {
    if forward {
        (idx + 1) % len
    } else if idx == 0 {
        len - 1
    } else {
        idx - 1
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn test_app(question_count: usize) -> App {
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        let config = Config {
            question_count,
            ..Config::default()
        };
        App::new(config, theme, SmallRng::seed_from_u64(99))
    }

    fn correct_index(app: &App) -> usize {
        let session = app.run.as_ref().unwrap().current().unwrap();
        session
            .choices
            .iter()
            .position(|c| session.is_correct(c))
            .unwrap()
    }

    fn wrong_index(app: &App) -> usize {
        let session = app.run.as_ref().unwrap().current().unwrap();
        session
            .choices
            .iter()
            .position(|c| !session.is_correct(c))
            .unwrap()
    }

    #[test]
    fn full_quiz_reaches_summary() {
        let mut app = test_app(3);
        app.activate(MenuAction::StartQuiz);
        assert_eq!(app.screen, AppScreen::Quiz);

        app.choose(wrong_index(&app));
        assert!(app.wrong_flash.is_some());
        app.choose(correct_index(&app));
        assert!(app.wrong_flash.is_none());
        app.choose(correct_index(&app));
        app.choose(correct_index(&app));

        assert_eq!(app.screen, AppScreen::Summary);
        let summary = app.summary.as_ref().unwrap();
        assert!(summary.completed);
        assert_eq!(summary.score, 3);
        assert_eq!(summary.first_try, 2);
        assert_eq!(summary.corrected.len(), 1);
    }

    #[test]
    fn selection_stays_in_range_after_removal() {
        let mut app = test_app(2);
        app.start_quiz();
        app.selected_choice = 3;
        let wrong = wrong_index(&app);
        app.choose(wrong);
        assert!(app.selected_choice < app.visible_choice_count());

        app.select_prev();
        app.select_next();
        app.select_next();
        assert!(app.selected_choice < app.visible_choice_count());
    }

    #[test]
    fn out_of_range_choice_is_ignored() {
        let mut app = test_app(2);
        app.start_quiz();
        app.choose(9);
        let run = app.run.as_ref().unwrap();
        assert_eq!(run.score(), 0);
        assert!(!run.current().unwrap().had_wrong_attempt);
    }

    #[test]
    fn abandon_without_answers_returns_to_menu() {
        let mut app = test_app(4);
        app.start_quiz();
        app.abandon_quiz();
        assert_eq!(app.screen, AppScreen::Menu);
        assert!(app.run.is_none());
    }

    #[test]
    fn abandon_after_progress_shows_partial_summary() {
        let mut app = test_app(4);
        app.start_quiz();
        app.choose(correct_index(&app));
        app.abandon_quiz();
        assert_eq!(app.screen, AppScreen::Summary);
        let summary = app.summary.as_ref().unwrap();
        assert!(!summary.completed);
        assert_eq!(summary.score, 1);
    }

    #[test]
    fn retry_builds_a_fresh_run() {
        let mut app = test_app(1);
        app.start_quiz();
        app.choose(correct_index(&app));
        assert_eq!(app.screen, AppScreen::Summary);

        app.start_quiz();
        assert_eq!(app.screen, AppScreen::Quiz);
        let run = app.run.as_ref().unwrap();
        assert_eq!(run.score(), 0);
        assert!(!run.is_finished());
        assert!(app.summary.is_none());
    }

    #[test]
    fn settings_cycle_wraps_counts() {
        let mut app = test_app(12);
        app.settings_selected = 0;
        app.settings_cycle_forward();
        assert_eq!(app.config.question_count, 1);
        app.settings_cycle_backward();
        assert_eq!(app.config.question_count, 12);

        app.settings_selected = 1;
        app.config.distractor_count = 1;
        app.settings_cycle_backward();
        assert_eq!(app.config.distractor_count, MAX_DISTRACTORS);
        app.settings_cycle_forward();
        assert_eq!(app.config.distractor_count, 1);
    }

    #[test]
    fn untouched_settings_are_not_marked_for_saving() {
        let mut app = test_app(3);
        app.go_to_settings();
        assert!(!app.settings_dirty);
        // leaving without a change must not write the CLI-overridden count
        app.leave_settings();
        assert_eq!(app.screen, AppScreen::Menu);
        assert!(!app.settings_dirty);

        app.go_to_settings();
        app.settings_cycle_forward();
        assert!(app.settings_dirty);
    }

    #[test]
    fn settings_cycle_direction() {
        let mut app = test_app(12);
        app.settings_selected = 2;
        app.settings_cycle_forward();
        assert_eq!(app.config.direction, DirectionMode::KoreanToEnglish);
        app.settings_cycle_forward();
        assert_eq!(app.config.direction, DirectionMode::EnglishToKorean);
        app.settings_cycle_forward();
        assert_eq!(app.config.direction, DirectionMode::Mixed);
    }

    #[test]
    fn flash_expires_on_tick() {
        let mut app = test_app(2);
        app.start_quiz();
        app.wrong_flash = Some(WrongFlash {
            choice: "May".to_string(),
            at: Instant::now() - Duration::from_secs(5),
        });
        app.on_tick();
        assert!(app.wrong_flash.is_none());
    }
}
