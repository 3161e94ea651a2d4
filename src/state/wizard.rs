//! Vacancy search wizard
//!
//! A linear dialog: country, then profile, then level. Each incoming message
//! text is an action tag `<action>|<value>` produced by a keyboard button;
//! the action names the stage the value belongs to.

use crate::models::catalog::{self, OptionItem};
use crate::models::message::{Keyboard, OutboundMessage, SEARCH_VACANCIES_ACTION};
use crate::models::texts;
use super::conversation::ConversationState;

pub const ACTION_DELIMITER: char = '|';

pub const SELECT_COUNTRY_ACTION: &str = "select_country";
pub const SELECT_PROFILE_ACTION: &str = "select_profile";
pub const SELECT_LEVEL_ACTION: &str = "select_level";

/// A parsed action tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SearchVacancies,
    SelectCountry(String),
    SelectProfile(String),
    SelectLevel(String),
    /// Free text, a foreign tag, or a selection without a value
    Unknown,
}

impl Action {
    /// Parse message text. The value is everything after the first delimiter.
    pub fn parse(text: &str) -> Self {
        let (name, value) = match text.split_once(ACTION_DELIMITER) {
            Some((name, value)) => (name, Some(value)),
            None => (text, None),
        };

        match (name, value) {
            (SEARCH_VACANCIES_ACTION, _) => Action::SearchVacancies,
            (SELECT_COUNTRY_ACTION, Some(value)) => Action::SelectCountry(value.to_string()),
            (SELECT_PROFILE_ACTION, Some(value)) => Action::SelectProfile(value.to_string()),
            (SELECT_LEVEL_ACTION, Some(value)) => Action::SelectLevel(value.to_string()),
            _ => Action::Unknown,
        }
    }

    /// Action name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Action::SearchVacancies => SEARCH_VACANCIES_ACTION,
            Action::SelectCountry(_) => SELECT_COUNTRY_ACTION,
            Action::SelectProfile(_) => SELECT_PROFILE_ACTION,
            Action::SelectLevel(_) => SELECT_LEVEL_ACTION,
            Action::Unknown => "unknown",
        }
    }
}

/// What the wizard asks next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    ChooseCountry,
    ChooseProfile,
    ChooseLevel,
    /// Generic re-prompt for input the wizard does not understand
    ChooseOption,
}

impl Prompt {
    /// Options offered with this prompt and the action their buttons carry
    pub fn options(&self) -> Option<(&'static str, &'static [OptionItem])> {
        match self {
            Prompt::ChooseCountry => Some((SELECT_COUNTRY_ACTION, catalog::COUNTRIES)),
            Prompt::ChooseProfile => Some((SELECT_PROFILE_ACTION, catalog::PROFILES)),
            Prompt::ChooseLevel => Some((SELECT_LEVEL_ACTION, catalog::LEVELS)),
            Prompt::ChooseOption => None,
        }
    }

    pub fn text(&self) -> String {
        match self.options() {
            Some((_, items)) => {
                let labels = catalog::joined_labels(items);
                match self {
                    Prompt::ChooseCountry => texts::choose_country(&labels),
                    Prompt::ChooseProfile => texts::choose_profile(&labels),
                    _ => texts::choose_level(&labels),
                }
            }
            None => texts::CHOOSE_OPTION.to_string(),
        }
    }

    pub fn keyboard(&self) -> Keyboard {
        match self.options() {
            Some((action, items)) => Keyboard::with_options(action, items),
            None => Keyboard::standing(),
        }
    }

    /// Render the prompt with `state` attached as tracking data
    pub fn render(&self, state: &ConversationState) -> OutboundMessage {
        OutboundMessage::text(self.text())
            .with_keyboard(self.keyboard())
            .with_tracking_data(state.to_blob())
    }
}

/// Result of applying one action to the conversation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep asking; echo `state` back with the prompt
    Prompt { prompt: Prompt, state: ConversationState },
    /// All filters collected; the directory should be queried with `state`
    Finished(ConversationState),
}

impl Step {
    pub fn state(&self) -> &ConversationState {
        match self {
            Step::Prompt { state, .. } => state,
            Step::Finished(state) => state,
        }
    }
}

/// Advance the wizard by one action
pub fn advance(action: Action, mut state: ConversationState) -> Step {
    let prompt = match action {
        Action::SearchVacancies => {
            state = ConversationState::default();
            Prompt::ChooseCountry
        }
        Action::SelectCountry(value) => {
            state.country = Some(value);
            Prompt::ChooseProfile
        }
        Action::SelectProfile(value) => {
            state.profile = Some(value);
            Prompt::ChooseLevel
        }
        Action::SelectLevel(value) => {
            state.level = Some(value);
            return Step::Finished(state);
        }
        Action::Unknown => Prompt::ChooseOption,
    };

    Step::Prompt { prompt, state }
}
