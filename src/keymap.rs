use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::quiz::shuffle::option_index_for_key;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    NextQuestion,
    PrevQuestion,
    NextChapter,
    PrevChapter,
    RandomQuestion,
    RandomChapterAndQuestion,
    ChooseOption(usize),
    ToggleAutoNext,
    CycleShuffleMode,
    OpenChapterPicker,
    OpenQuestionPicker,
    PickerUp,
    PickerDown,
    PickerConfirm,
    ClosePicker,
    Quit,
}

/// Keys on the main quiz screen. Letters are option keys, so every
/// command sits on arrows, Space, Tab or a Ctrl chord.
pub fn quiz_action(key: KeyEvent, option_count: usize) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::CycleShuffleMode),
            KeyCode::Char('o') => Some(Action::OpenChapterPicker),
            KeyCode::Char('g') => Some(Action::OpenQuestionPicker),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Right | KeyCode::Char(' ') if shift => Some(Action::NextChapter),
        KeyCode::Right | KeyCode::Char(' ') => Some(Action::NextQuestion),
        KeyCode::Left if shift => Some(Action::PrevChapter),
        KeyCode::Left => Some(Action::PrevQuestion),
        KeyCode::Up => Some(Action::RandomQuestion),
        KeyCode::Down => Some(Action::RandomChapterAndQuestion),
        KeyCode::Tab => Some(Action::ToggleAutoNext),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(ch) => option_index_for_key(ch, option_count).map(Action::ChooseOption),
        _ => None,
    }
}

pub fn picker_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::PickerUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::PickerDown),
        KeyCode::Enter => Some(Action::PickerConfirm),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::ClosePicker),
        _ => None,
    }
}
