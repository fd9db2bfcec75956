// ABOUTME: Event handling: keyboard input mapped to app events per view/tab/focus

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::{AppState, ContentFocus, DashboardPhase, DashboardTab, StoreFocus, View};
use crate::components::onboarding::WizardPhase;

/// Semantic actions produced from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    NextTab,
    PreviousTab,
    RetryFetch,
    SwitchCard,

    // Title panel
    TitleStartEdit,
    TitleInputChar(char),
    TitleBackspace,
    TitleDelete,
    TitleCursorLeft,
    TitleCursorRight,
    TitleCursorHome,
    TitleCursorEnd,
    TitleCancel,
    TitleSave,

    // Logo panel
    LogoStartEntry,
    LogoInputChar(char),
    LogoBackspace,
    LogoStage,
    LogoCancelEntry,
    LogoClear,
    LogoSave,

    // Theme panel
    ThemeStartEdit,
    ThemeInputChar(char),
    ThemeBackspace,
    ThemeCancel,
    ThemeSave,

    // Cue panel
    CueStartEntry,
    CueInputChar(char),
    CueBackspace,
    CueToggleField,
    CueCommitEntry,
    CueCancelEntry,
    CueEditSelected,
    CueDeleteSelected,
    CueSelectUp,
    CueSelectDown,
    CueSuggestionUp,
    CueSuggestionDown,
    CuePromoteSelected,
    CueGenerate,
    CueSave,

    // Loader text panel
    LoaderStartEntry,
    LoaderInputChar(char),
    LoaderBackspace,
    LoaderCommitEntry,
    LoaderCancelEntry,
    LoaderEditSelected,
    LoaderDeleteSelected,
    LoaderSelectUp,
    LoaderSelectDown,
    LoaderSuggestionUp,
    LoaderSuggestionDown,
    LoaderPromoteSelected,
    LoaderGenerate,
    LoaderSave,

    // Personality panel
    PersonalityStartEdit,
    PersonalityCursorUp,
    PersonalityCursorDown,
    PersonalityToggle,
    PersonalityCancel,
    PersonalitySave,

    // Onboarding wizard
    WizardInputChar(char),
    WizardBackspace,
    WizardDelete,
    WizardCursorLeft,
    WizardCursorRight,
    WizardCursorHome,
    WizardCursorEnd,
    WizardFocusNext,
    WizardListUp,
    WizardListDown,
    WizardSelect,
    WizardNext,
    WizardBack,
    WizardDismissError,
    WizardOpenDashboard,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a key event into a semantic event for the current view,
    /// then apply it. Returns false when the key was not handled.
    pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> bool {
        let Some(event) = Self::map_key(key, state) else {
            return false;
        };
        Self::apply(event, state);
        true
    }

    fn map_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Ctrl-C quits from anywhere.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        match state.view {
            View::Onboarding => Self::map_wizard_key(key, state),
            View::Dashboard => Self::map_dashboard_key(key, state),
        }
    }

    fn map_wizard_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let wizard = state.wizard.as_ref()?;

        if wizard.error_banner.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(AppEvent::WizardDismissError),
                _ => None,
            };
        }

        match wizard.phase {
            WizardPhase::Completed => match key.code {
                KeyCode::Enter => Some(AppEvent::WizardOpenDashboard),
                KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
                _ => None,
            },
            WizardPhase::Submitting => None,
            WizardPhase::Form => {
                let text_focus = Self::wizard_has_text_focus(state);
                match key.code {
                    KeyCode::Esc => Some(AppEvent::Quit),
                    KeyCode::Enter => Some(AppEvent::WizardNext),
                    KeyCode::Tab => Some(AppEvent::WizardFocusNext),
                    KeyCode::Backspace => Some(AppEvent::WizardBackspace),
                    KeyCode::Delete => Some(AppEvent::WizardDelete),
                    KeyCode::Left if text_focus => Some(AppEvent::WizardCursorLeft),
                    KeyCode::Right if text_focus => Some(AppEvent::WizardCursorRight),
                    KeyCode::Home => Some(AppEvent::WizardCursorHome),
                    KeyCode::End => Some(AppEvent::WizardCursorEnd),
                    KeyCode::Left => Some(AppEvent::WizardBack),
                    KeyCode::Up => Some(AppEvent::WizardListUp),
                    KeyCode::Down => Some(AppEvent::WizardListDown),
                    KeyCode::Char(' ') if !text_focus => Some(AppEvent::WizardSelect),
                    KeyCode::Char(c) if text_focus => Some(AppEvent::WizardInputChar(c)),
                    _ => None,
                }
            }
        }
    }

    /// Whether typing on the current wizard step lands in a text field.
    fn wizard_has_text_focus(state: &AppState) -> bool {
        state.wizard.as_ref().is_some_and(|w| {
            use crate::components::onboarding::WizardStep;
            matches!(
                (w.step, w.focus),
                (WizardStep::Personal, _) | (WizardStep::Company, 0)
            )
        })
    }

    fn map_dashboard_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match &state.dashboard_phase {
            DashboardPhase::Failed(_) => {
                return match key.code {
                    KeyCode::Char('r') => Some(AppEvent::RetryFetch),
                    KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
                    _ => None,
                };
            }
            DashboardPhase::NoSeller | DashboardPhase::Loading => {
                return match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
                    KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
                    _ => None,
                };
            }
            DashboardPhase::Ready => {}
        }

        // While a scalar panel is in text-edit mode, keys go to its input.
        if state.title.is_editing() && state.active_tab == DashboardTab::StoreInfo {
            return Self::map_title_edit_key(key);
        }
        if state.theme.is_editing() && state.active_tab == DashboardTab::Theme {
            return Self::map_theme_edit_key(key);
        }

        // Global dashboard navigation, disabled while an entry row is
        // capturing keystrokes.
        if !Self::dashboard_typing(state) {
            match key.code {
                KeyCode::Char('q') => return Some(AppEvent::Quit),
                KeyCode::Char('?') => return Some(AppEvent::ToggleHelp),
                KeyCode::Right | KeyCode::Char(']') => return Some(AppEvent::NextTab),
                KeyCode::Left | KeyCode::Char('[') => return Some(AppEvent::PreviousTab),
                _ => {}
            }
        }

        match state.active_tab {
            DashboardTab::StoreInfo => Self::map_store_info_key(key, state),
            DashboardTab::Theme => match key.code {
                KeyCode::Char('e') => Some(AppEvent::ThemeStartEdit),
                _ => None,
            },
            DashboardTab::Content => Self::map_content_key(key, state),
            DashboardTab::Personalities => Self::map_personality_key(key, state),
        }
    }

    /// Whether an entry row on the active tab is capturing keystrokes.
    fn dashboard_typing(state: &AppState) -> bool {
        match state.active_tab {
            DashboardTab::StoreInfo => {
                state.store_focus == StoreFocus::Logo && state.logo_inserting
            }
            DashboardTab::Content => match state.content_focus {
                ContentFocus::Cues => state.cue_inserting,
                ContentFocus::Loaders => state.loader_inserting,
            },
            DashboardTab::Theme | DashboardTab::Personalities => false,
        }
    }

    fn map_title_edit_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc => Some(AppEvent::TitleCancel),
            KeyCode::Enter => Some(AppEvent::TitleSave),
            KeyCode::Backspace => Some(AppEvent::TitleBackspace),
            KeyCode::Delete => Some(AppEvent::TitleDelete),
            KeyCode::Left => Some(AppEvent::TitleCursorLeft),
            KeyCode::Right => Some(AppEvent::TitleCursorRight),
            KeyCode::Home => Some(AppEvent::TitleCursorHome),
            KeyCode::End => Some(AppEvent::TitleCursorEnd),
            KeyCode::Char(c) => Some(AppEvent::TitleInputChar(c)),
            _ => None,
        }
    }

    fn map_theme_edit_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc => Some(AppEvent::ThemeCancel),
            KeyCode::Enter => Some(AppEvent::ThemeSave),
            KeyCode::Backspace => Some(AppEvent::ThemeBackspace),
            KeyCode::Char(c) => Some(AppEvent::ThemeInputChar(c)),
            _ => None,
        }
    }

    fn map_store_info_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key.code == KeyCode::Tab && !Self::dashboard_typing(state) {
            return Some(AppEvent::SwitchCard);
        }
        match state.store_focus {
            StoreFocus::Title => match key.code {
                KeyCode::Char('e') => Some(AppEvent::TitleStartEdit),
                _ => None,
            },
            StoreFocus::Logo => {
                if state.logo_inserting {
                    match key.code {
                        KeyCode::Enter => Some(AppEvent::LogoStage),
                        KeyCode::Esc => Some(AppEvent::LogoCancelEntry),
                        KeyCode::Backspace => Some(AppEvent::LogoBackspace),
                        KeyCode::Char(c) => Some(AppEvent::LogoInputChar(c)),
                        _ => None,
                    }
                } else {
                    match key.code {
                        KeyCode::Char('a') => Some(AppEvent::LogoStartEntry),
                        KeyCode::Char('s') => Some(AppEvent::LogoSave),
                        KeyCode::Char('x') => Some(AppEvent::LogoClear),
                        _ => None,
                    }
                }
            }
        }
    }

    fn map_content_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key.code == KeyCode::Tab && !Self::dashboard_typing(state) {
            return Some(AppEvent::SwitchCard);
        }
        match state.content_focus {
            ContentFocus::Cues => {
                if state.cue_inserting {
                    match key.code {
                        KeyCode::Enter if state.cue_focus_value => Some(AppEvent::CueCommitEntry),
                        KeyCode::Enter | KeyCode::Tab => Some(AppEvent::CueToggleField),
                        KeyCode::Esc => Some(AppEvent::CueCancelEntry),
                        KeyCode::Backspace => Some(AppEvent::CueBackspace),
                        KeyCode::Char(c) => Some(AppEvent::CueInputChar(c)),
                        _ => None,
                    }
                } else {
                    match key.code {
                        KeyCode::Char('a') => Some(AppEvent::CueStartEntry),
                        KeyCode::Up => Some(AppEvent::CueSelectUp),
                        KeyCode::Down => Some(AppEvent::CueSelectDown),
                        KeyCode::PageUp => Some(AppEvent::CueSuggestionUp),
                        KeyCode::PageDown => Some(AppEvent::CueSuggestionDown),
                        KeyCode::Char('g') => Some(AppEvent::CueGenerate),
                        KeyCode::Char('s') => Some(AppEvent::CueSave),
                        KeyCode::Char('e') => Some(AppEvent::CueEditSelected),
                        KeyCode::Char('d') => Some(AppEvent::CueDeleteSelected),
                        KeyCode::Char('p') => Some(AppEvent::CuePromoteSelected),
                        _ => None,
                    }
                }
            }
            ContentFocus::Loaders => {
                if state.loader_inserting {
                    match key.code {
                        KeyCode::Enter => Some(AppEvent::LoaderCommitEntry),
                        KeyCode::Esc => Some(AppEvent::LoaderCancelEntry),
                        KeyCode::Backspace => Some(AppEvent::LoaderBackspace),
                        KeyCode::Char(c) => Some(AppEvent::LoaderInputChar(c)),
                        _ => None,
                    }
                } else {
                    match key.code {
                        KeyCode::Char('a') => Some(AppEvent::LoaderStartEntry),
                        KeyCode::Up => Some(AppEvent::LoaderSelectUp),
                        KeyCode::Down => Some(AppEvent::LoaderSelectDown),
                        KeyCode::PageUp => Some(AppEvent::LoaderSuggestionUp),
                        KeyCode::PageDown => Some(AppEvent::LoaderSuggestionDown),
                        KeyCode::Char('g') => Some(AppEvent::LoaderGenerate),
                        KeyCode::Char('s') => Some(AppEvent::LoaderSave),
                        KeyCode::Char('e') => Some(AppEvent::LoaderEditSelected),
                        KeyCode::Char('d') => Some(AppEvent::LoaderDeleteSelected),
                        KeyCode::Char('p') => Some(AppEvent::LoaderPromoteSelected),
                        _ => None,
                    }
                }
            }
        }
    }

    fn map_personality_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.personalities.is_editing() {
            match key.code {
                KeyCode::Esc => Some(AppEvent::PersonalityCancel),
                KeyCode::Up => Some(AppEvent::PersonalityCursorUp),
                KeyCode::Down => Some(AppEvent::PersonalityCursorDown),
                KeyCode::Char(' ') | KeyCode::Enter => Some(AppEvent::PersonalityToggle),
                KeyCode::Char('s') => Some(AppEvent::PersonalitySave),
                _ => None,
            }
        } else {
            match key.code {
                KeyCode::Char('e') => Some(AppEvent::PersonalityStartEdit),
                _ => None,
            }
        }
    }

    /// Execute one semantic event against the state.
    pub fn apply(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::ToggleHelp => state.help_visible = !state.help_visible,
            AppEvent::NextTab => state.active_tab = state.active_tab.next(),
            AppEvent::PreviousTab => state.active_tab = state.active_tab.previous(),
            AppEvent::RetryFetch => state.retry_fetch(),
            AppEvent::SwitchCard => match state.active_tab {
                DashboardTab::StoreInfo => {
                    state.store_focus = match state.store_focus {
                        StoreFocus::Title => StoreFocus::Logo,
                        StoreFocus::Logo => StoreFocus::Title,
                    };
                }
                DashboardTab::Content => {
                    state.content_focus = match state.content_focus {
                        ContentFocus::Cues => ContentFocus::Loaders,
                        ContentFocus::Loaders => ContentFocus::Cues,
                    };
                }
                _ => {}
            },

            AppEvent::TitleStartEdit => state.title_start_edit(),
            AppEvent::TitleInputChar(c) => state.title_edit_input(|i| i.insert(c)),
            AppEvent::TitleBackspace => state.title_edit_input(|i| i.backspace()),
            AppEvent::TitleDelete => state.title_edit_input(|i| i.delete()),
            AppEvent::TitleCursorLeft => state.title_edit_input(|i| i.cursor_left()),
            AppEvent::TitleCursorRight => state.title_edit_input(|i| i.cursor_right()),
            AppEvent::TitleCursorHome => state.title_edit_input(|i| i.cursor_home()),
            AppEvent::TitleCursorEnd => state.title_edit_input(|i| i.cursor_end()),
            AppEvent::TitleCancel => state.title_cancel(),
            AppEvent::TitleSave => state.title_save(),

            AppEvent::LogoStartEntry => state.logo_start_entry(),
            AppEvent::LogoCancelEntry => state.logo_cancel_entry(),
            AppEvent::LogoInputChar(c) => state.logo_edit_input(|i| i.insert(c)),
            AppEvent::LogoBackspace => state.logo_edit_input(|i| i.backspace()),
            AppEvent::LogoStage => state.logo_stage(),
            AppEvent::LogoClear => state.logo_clear(),
            AppEvent::LogoSave => state.logo_save(),

            AppEvent::ThemeStartEdit => state.theme_start_edit(),
            AppEvent::ThemeInputChar(c) => state.theme_edit_input(|i| i.insert(c)),
            AppEvent::ThemeBackspace => state.theme_edit_input(|i| i.backspace()),
            AppEvent::ThemeCancel => state.theme_cancel(),
            AppEvent::ThemeSave => state.theme_save(),

            AppEvent::CueStartEntry => state.cue_start_entry(),
            AppEvent::CueInputChar(c) => {
                if state.cue_focus_value {
                    state.cue_value_input.insert(c);
                } else {
                    state.cue_title_input.insert(c);
                }
            }
            AppEvent::CueBackspace => {
                if state.cue_focus_value {
                    state.cue_value_input.backspace();
                } else {
                    state.cue_title_input.backspace();
                }
            }
            AppEvent::CueToggleField => state.cue_focus_value = !state.cue_focus_value,
            AppEvent::CueCommitEntry => state.cue_commit_entry(),
            AppEvent::CueCancelEntry => state.cue_cancel_entry(),
            AppEvent::CueEditSelected => state.cue_edit_selected(),
            AppEvent::CueDeleteSelected => state.cue_delete_selected(),
            AppEvent::CueSelectUp => {
                state.cue_selected = state.cue_selected.saturating_sub(1);
            }
            AppEvent::CueSelectDown => {
                let last = state.cues.draft().len().saturating_sub(1);
                state.cue_selected = (state.cue_selected + 1).min(last);
            }
            AppEvent::CueSuggestionUp => {
                state.cue_suggestion_selected = state.cue_suggestion_selected.saturating_sub(1);
            }
            AppEvent::CueSuggestionDown => {
                let last = state.cues.suggestions().len().saturating_sub(1);
                state.cue_suggestion_selected = (state.cue_suggestion_selected + 1).min(last);
            }
            AppEvent::CuePromoteSelected => state.cue_promote_selected(),
            AppEvent::CueGenerate => state.cue_generate(),
            AppEvent::CueSave => state.cue_save(),

            AppEvent::LoaderStartEntry => state.loader_start_entry(),
            AppEvent::LoaderCancelEntry => state.loader_cancel_entry(),
            AppEvent::LoaderInputChar(c) => state.loader_input.insert(c),
            AppEvent::LoaderBackspace => state.loader_input.backspace(),
            AppEvent::LoaderCommitEntry => state.loader_commit_entry(),
            AppEvent::LoaderEditSelected => state.loader_edit_selected(),
            AppEvent::LoaderDeleteSelected => state.loader_delete_selected(),
            AppEvent::LoaderSelectUp => {
                state.loader_selected = state.loader_selected.saturating_sub(1);
            }
            AppEvent::LoaderSelectDown => {
                let last = state.loaders.draft().len().saturating_sub(1);
                state.loader_selected = (state.loader_selected + 1).min(last);
            }
            AppEvent::LoaderSuggestionUp => {
                state.loader_suggestion_selected =
                    state.loader_suggestion_selected.saturating_sub(1);
            }
            AppEvent::LoaderSuggestionDown => {
                let last = state.loaders.suggestions().len().saturating_sub(1);
                state.loader_suggestion_selected = (state.loader_suggestion_selected + 1).min(last);
            }
            AppEvent::LoaderPromoteSelected => state.loader_promote_selected(),
            AppEvent::LoaderGenerate => state.loader_generate(),
            AppEvent::LoaderSave => state.loader_save(),

            AppEvent::PersonalityStartEdit => state.personality_start_edit(),
            AppEvent::PersonalityCursorUp => state.personality_move_cursor(-1),
            AppEvent::PersonalityCursorDown => state.personality_move_cursor(1),
            AppEvent::PersonalityToggle => state.personality_toggle(),
            AppEvent::PersonalityCancel => state.personality_cancel(),
            AppEvent::PersonalitySave => state.personality_save(),

            AppEvent::WizardInputChar(c) => Self::with_wizard_field(state, |f| f.insert(c)),
            AppEvent::WizardBackspace => Self::with_wizard_field(state, |i| i.backspace()),
            AppEvent::WizardDelete => Self::with_wizard_field(state, |i| i.delete()),
            AppEvent::WizardCursorLeft => Self::with_wizard_field(state, |i| i.cursor_left()),
            AppEvent::WizardCursorRight => {
                Self::with_wizard_field(state, |i| i.cursor_right());
            }
            AppEvent::WizardCursorHome => Self::with_wizard_field(state, |i| i.cursor_home()),
            AppEvent::WizardCursorEnd => Self::with_wizard_field(state, |i| i.cursor_end()),
            AppEvent::WizardFocusNext => {
                if let Some(wizard) = &mut state.wizard {
                    wizard.focus_next_field();
                }
            }
            AppEvent::WizardListUp => Self::wizard_list_move(state, -1),
            AppEvent::WizardListDown => Self::wizard_list_move(state, 1),
            AppEvent::WizardSelect => Self::wizard_select(state),
            AppEvent::WizardNext => {
                let is_final = state.wizard.as_ref().is_some_and(|w| w.is_final_step());
                if is_final {
                    state.wizard_submit();
                } else if let Some(wizard) = &mut state.wizard {
                    wizard.advance();
                }
            }
            AppEvent::WizardBack => {
                if let Some(wizard) = &mut state.wizard {
                    wizard.go_back();
                }
            }
            AppEvent::WizardDismissError => {
                if let Some(wizard) = &mut state.wizard {
                    wizard.dismiss_error();
                }
            }
            AppEvent::WizardOpenDashboard => state.wizard_open_dashboard(),
        }
    }

    fn with_wizard_field(state: &mut AppState, edit: impl FnOnce(&mut crate::app::input::TextInput)) {
        if let Some(field) = state.wizard.as_mut().and_then(|w| w.focused_field_mut()) {
            edit(field);
        }
    }

    fn wizard_list_move(state: &mut AppState, delta: isize) {
        use crate::components::onboarding::WizardStep;
        let Some(wizard) = &mut state.wizard else {
            return;
        };
        match wizard.step {
            WizardStep::Personal => {
                if delta > 0 {
                    wizard.focus_next_field();
                } else {
                    wizard.focus = wizard.focus.saturating_sub(1);
                }
            }
            // Radio-style lists: moving the cursor selects the option.
            WizardStep::Company => {
                wizard.move_bucket_cursor(delta);
                wizard.select_bucket();
            }
            WizardStep::Goal => {
                wizard.move_goal_cursor(delta);
                wizard.select_goal();
            }
            WizardStep::ProductTypes => wizard.move_category_cursor(delta),
        }
    }

    fn wizard_select(state: &mut AppState) {
        use crate::components::onboarding::WizardStep;
        let Some(wizard) = &mut state.wizard else {
            return;
        };
        match wizard.step {
            WizardStep::Company => wizard.select_bucket(),
            WizardStep::Goal => wizard.select_goal(),
            WizardStep::ProductTypes => wizard.toggle_category(),
            WizardStep::Personal => {}
        }
    }
}
