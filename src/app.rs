use std::rc::Rc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::keymap::Action;
use crate::quiz::dataset::{Dataset, Question};
use crate::quiz::navigation::{AutoAdvanceMode, Navigator};
use crate::session::quiz::QuizSession;
use crate::ui::components::picker::{Picker, PickerKind};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Quiz,
    Picker,
}

pub struct App {
    pub screen: AppScreen,
    pub navigator: Navigator<SmallRng>,
    pub session: QuizSession,
    pub picker: Option<Picker<'static>>,
    pub theme: &'static Theme,
    pub auto_next: bool,
    pub auto_advance_delay: Duration,
    pub should_quit: bool,
    rng: SmallRng,
}

impl App {
    pub fn new(dataset: Dataset, config: &Config, theme: &'static Theme) -> Self {
        Self::with_rngs(
            dataset,
            config,
            theme,
            SmallRng::from_entropy(),
            SmallRng::from_entropy(),
        )
    }

    /// `nav_rng` drives random jumps, `shuffle_rng` the option order.
    pub fn with_rngs(
        dataset: Dataset,
        config: &Config,
        theme: &'static Theme,
        nav_rng: SmallRng,
        mut shuffle_rng: SmallRng,
    ) -> Self {
        let mut navigator = Navigator::new(Rc::new(dataset), nav_rng);
        navigator.set_mode(config.shuffle_mode);
        let session = QuizSession::new(navigator.current_question(), &mut shuffle_rng);

        info!(
            "quiz ready: {} chapters, {} questions, mode {:?}, auto next {}",
            navigator.dataset().chapter_count(),
            navigator.dataset().question_count(),
            navigator.mode(),
            config.auto_next,
        );

        Self {
            screen: AppScreen::Quiz,
            navigator,
            session,
            picker: None,
            theme,
            auto_next: config.auto_next,
            auto_advance_delay: config.auto_advance_delay(),
            should_quit: false,
            rng: shuffle_rng,
        }
    }

    pub fn current_question(&self) -> &Question {
        self.navigator.current_question()
    }

    /// Rebuilds the displayed question: new option order, no feedback and
    /// no pending auto-advance.
    fn show_current(&mut self) {
        let state = self.navigator.state();
        debug!(
            "showing chapter {} question {}",
            self.navigator.current_chapter_name(),
            state.question
        );
        self.session = QuizSession::new(self.navigator.current_question(), &mut self.rng);
    }

    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::NextQuestion => self.navigate(|n| n.advance_question()),
            Action::PrevQuestion => self.navigate(|n| n.retreat_question()),
            Action::NextChapter => self.navigate(|n| n.advance_chapter()),
            Action::PrevChapter => self.navigate(|n| n.retreat_chapter()),
            Action::RandomQuestion => self.navigate(|n| n.jump_to_random_question()),
            Action::RandomChapterAndQuestion => {
                self.navigate(|n| n.jump_to_random_chapter_and_question())
            }
            Action::ChooseOption(position) => self.choose_option(position, now),
            Action::ToggleAutoNext => {
                self.auto_next = !self.auto_next;
                info!("auto next {}", if self.auto_next { "on" } else { "off" });
            }
            Action::CycleShuffleMode => {
                let mode = self.navigator.cycle_auto_advance_mode();
                info!("shuffle mode: {}", mode.label());
            }
            Action::OpenChapterPicker => self.open_picker(PickerKind::Chapter),
            Action::OpenQuestionPicker => self.open_picker(PickerKind::Question),
            Action::PickerUp => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.prev();
                }
            }
            Action::PickerDown => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.next();
                }
            }
            Action::PickerConfirm => self.confirm_picker(),
            Action::ClosePicker => self.close_picker(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Manual navigation. Replacing the session drops any pending
    /// auto-advance scheduled for the previous question.
    fn navigate(&mut self, transition: impl FnOnce(&mut Navigator<SmallRng>)) {
        if self.session.pending_advance.is_some() {
            debug!("manual navigation cancels pending auto-advance");
        }
        transition(&mut self.navigator);
        self.show_current();
    }

    fn choose_option(&mut self, position: usize, now: Instant) {
        let Some(selected) = self.session.selectable(position) else {
            return;
        };
        let decision = self
            .navigator
            .on_answer_selected(selected, self.session.answer(), self.auto_next);
        debug!(
            "answered option {position} in {} q{}: {:?}",
            self.navigator.current_chapter_name(),
            self.navigator.state().question,
            decision.outcome
        );
        self.session.record(position, decision, self.auto_advance_delay, now);
    }

    /// Called on every tick; fires a due auto-advance. Nothing fires while
    /// a picker is open, since its entries belong to the current chapter.
    pub fn tick(&mut self, now: Instant) {
        if self.screen == AppScreen::Picker {
            return;
        }
        if self.session.take_due_advance(now) {
            debug!("auto-advance ({})", self.navigator.mode().label());
            self.navigator.auto_advance();
            self.show_current();
        }
    }

    pub fn mode(&self) -> AutoAdvanceMode {
        self.navigator.mode()
    }

    fn open_picker(&mut self, kind: PickerKind) {
        let (items, selected): (Vec<String>, usize) = match kind {
            PickerKind::Chapter => (
                self.navigator
                    .dataset()
                    .chapter_names()
                    .map(str::to_string)
                    .collect(),
                self.navigator.state().chapter,
            ),
            PickerKind::Question => (
                self.navigator
                    .current_chapter()
                    .questions
                    .iter()
                    .map(|q| format!("Question {}", q.original_index + 1))
                    .collect(),
                self.navigator.state().question,
            ),
        };
        if self.session.pending_advance.is_some() {
            debug!("opening picker cancels pending auto-advance");
            self.session.cancel_pending_advance();
        }
        self.picker = Some(Picker::new(kind, items, selected, self.theme));
        self.screen = AppScreen::Picker;
    }

    fn confirm_picker(&mut self) {
        let Some(picker) = self.picker.take() else {
            self.screen = AppScreen::Quiz;
            return;
        };
        self.screen = AppScreen::Quiz;

        let result = match picker.kind {
            PickerKind::Chapter => match picker.items.get(picker.selected) {
                Some(name) => self.navigator.select_chapter(name),
                None => return,
            },
            PickerKind::Question => self.navigator.select_question(picker.selected),
        };
        match result {
            Ok(()) => self.show_current(),
            Err(e) => warn!("picker selection rejected: {e}"),
        }
    }

    fn close_picker(&mut self) {
        self.picker = None;
        self.screen = AppScreen::Quiz;
    }
}
