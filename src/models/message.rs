//! Outbound messages and reply keyboards

use serde::Serialize;

use super::catalog::OptionItem;
use super::texts;

/// Action body of the standing "search vacancies" button
pub const SEARCH_VACANCIES_ACTION: &str = "search_vacancies";

const KEYBOARD_BG_COLOR: &str = "#FFFFFF";
const BUTTON_BG_COLOR: &str = "#e6f5ff";
const FULL_WIDTH_COLUMNS: u8 = 6;
const OPTION_COLUMNS: u8 = 3;

/// A reply button rendered in the client keyboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Button {
    pub columns: u8,
    pub rows: u8,
    pub bg_color: String,
    pub bg_loop: bool,
    pub action_type: String,
    /// Text posted back to the bot when the button is pressed
    pub action_body: String,
    pub reply_type: String,
    pub text: String,
}

impl Button {
    /// A reply button that posts `action_body` back as a message
    pub fn reply(columns: u8, action_body: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            columns,
            rows: 1,
            bg_color: BUTTON_BG_COLOR.to_string(),
            bg_loop: true,
            action_type: "reply".to_string(),
            action_body: action_body.into(),
            reply_type: "message".to_string(),
            text: text.into(),
        }
    }

    /// The full-width button that (re)starts the vacancy search
    pub fn search_vacancies() -> Self {
        Self::reply(FULL_WIDTH_COLUMNS, SEARCH_VACANCIES_ACTION, texts::SEARCH_VACANCIES_BUTTON)
    }

    /// A half-width option button with action body `<action>|<code>`
    pub fn option(action: &str, item: &OptionItem) -> Self {
        Self::reply(OPTION_COLUMNS, format!("{}|{}", action, item.code), item.label)
    }
}

/// Custom keyboard attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Keyboard {
    pub default_height: bool,
    pub bg_color: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub buttons: Vec<Button>,
}

impl Keyboard {
    pub fn new(buttons: Vec<Button>) -> Self {
        Self {
            default_height: true,
            bg_color: KEYBOARD_BG_COLOR.to_string(),
            kind: "keyboard".to_string(),
            buttons,
        }
    }

    /// Keyboard holding only the standing "search vacancies" button
    pub fn standing() -> Self {
        Self::new(vec![Button::search_vacancies()])
    }

    /// Standing button followed by one button per option
    pub fn with_options(action: &str, items: &[OptionItem]) -> Self {
        let mut buttons = Vec::with_capacity(items.len() + 1);
        buttons.push(Button::search_vacancies());
        buttons.extend(items.iter().map(|item| Button::option(action, item)));
        Self::new(buttons)
    }
}

/// Content of an outbound message, tagged with the Viber message type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text { text: String },
    Url { media: String },
}

/// A message ready to be delivered to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    #[serde(flatten)]
    pub content: MessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<Keyboard>,
    /// Conversation state the client echoes back with its next message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_data: Option<String>,
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: MessageContent::Text { text: text.into() },
            keyboard: None,
            tracking_data: None,
        }
    }

    pub fn url(media: impl Into<String>) -> Self {
        Self {
            content: MessageContent::Url { media: media.into() },
            keyboard: None,
            tracking_data: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn with_tracking_data(mut self, tracking_data: impl Into<String>) -> Self {
        self.tracking_data = Some(tracking_data.into());
        self
    }

    /// Text of a text message, `None` for other kinds
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text { text } => Some(text),
            MessageContent::Url { .. } => None,
        }
    }
}
