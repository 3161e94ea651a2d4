//! Dialog controller
//!
//! Turns one inbound Viber event into the messages the bot sends back.

use tracing::{debug, info};
use crate::models::event::{InboundMessage, ViberEvent};
use crate::models::message::{Keyboard, OutboundMessage};
use crate::models::texts;
use crate::services::VacancyService;
use crate::state::{advance, Action, ConversationState, Step};
use crate::utils::logging;

/// Messages addressed to one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub receiver: String,
    pub messages: Vec<OutboundMessage>,
}

/// Drives the vacancy search dialog
#[derive(Debug, Clone)]
pub struct DialogController {
    vacancies: VacancyService,
}

impl DialogController {
    pub fn new(vacancies: VacancyService) -> Self {
        Self { vacancies }
    }

    /// Handle an inbound event; `None` when nothing should be sent
    pub async fn handle_event(&self, event: &ViberEvent) -> Option<Reply> {
        match event {
            ViberEvent::Message { sender, message, .. } => {
                let messages = self.handle_message(&sender.id, message).await;
                Some(Reply { receiver: sender.id.clone(), messages })
            }
            ViberEvent::Subscribed { user } => {
                logging::log_user_action(&user.id, "subscribed", None);
                Some(Reply {
                    receiver: user.id.clone(),
                    messages: vec![OutboundMessage::text(texts::SUBSCRIBED)],
                })
            }
            ViberEvent::ConversationStarted { user, .. } => {
                logging::log_user_action(&user.id, "conversation_started", None);
                Some(Reply {
                    receiver: user.id.clone(),
                    messages: vec![OutboundMessage::text(texts::GREETING).with_keyboard(Keyboard::standing())],
                })
            }
            ViberEvent::Failed { user_id, message_token, desc } => {
                logging::log_delivery_failure(user_id, *message_token, desc.as_deref());
                None
            }
            ViberEvent::Unsubscribed { user_id } => {
                logging::log_user_action(user_id, "unsubscribed", None);
                None
            }
            ViberEvent::Delivered { .. }
            | ViberEvent::Seen { .. }
            | ViberEvent::Webhook
            | ViberEvent::Unknown => {
                debug!(event = event.kind(), "Ignoring service event");
                None
            }
        }
    }

    /// Advance the wizard for one user message
    pub async fn handle_message(&self, user_id: &str, message: &InboundMessage) -> Vec<OutboundMessage> {
        let action = message.text.as_deref().map(Action::parse).unwrap_or(Action::Unknown);
        let state = ConversationState::from_blob(message.tracking_data.as_deref());

        logging::log_user_action(user_id, action.name(), message.text.as_deref());

        match advance(action, state) {
            Step::Prompt { prompt, state } => vec![prompt.render(&state)],
            Step::Finished(state) => self.search(user_id, &state).await,
        }
    }

    /// Query the directory and render the results; the wizard ends here so
    /// every message carries an empty state
    async fn search(&self, user_id: &str, state: &ConversationState) -> Vec<OutboundMessage> {
        let empty_state = ConversationState::default().to_blob();

        let urls = match self.vacancies.search(state).await {
            Ok(urls) => urls,
            Err(e) => {
                logging::log_api_error("vacancies", &e.to_string(), Some(user_id));
                return vec![OutboundMessage::text(texts::DIRECTORY_UNAVAILABLE)
                    .with_keyboard(Keyboard::standing())
                    .with_tracking_data(empty_state)];
            }
        };

        info!(user_id = user_id, results = urls.len(), "Vacancy search finished");

        if urls.is_empty() {
            return vec![OutboundMessage::text(texts::NO_VACANCIES)
                .with_keyboard(Keyboard::standing())
                .with_tracking_data(empty_state)];
        }

        urls.into_iter()
            .map(|url| {
                OutboundMessage::url(url)
                    .with_keyboard(Keyboard::standing())
                    .with_tracking_data(empty_state.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VacanciesConfig;
    use crate::models::event::ViberUser;

    /// Controller pointing at an address nothing listens on
    fn offline_controller() -> DialogController {
        let config = VacanciesConfig {
            api_url: "http://127.0.0.1:9/api/vacancies/".to_string(),
            timeout_seconds: Some(1),
        };
        DialogController::new(VacancyService::new(&config).unwrap())
    }

    fn user(id: &str) -> ViberUser {
        ViberUser { id: id.to_string(), name: None, avatar: None, language: None, country: None }
    }

    fn text_message(text: Option<&str>, tracking_data: Option<&str>) -> InboundMessage {
        InboundMessage {
            kind: "text".to_string(),
            text: text.map(String::from),
            tracking_data: tracking_data.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_conversation_started_ignores_state() {
        let controller = offline_controller();
        let event = ViberEvent::ConversationStarted { user: user("u1"), context: Some("{\"country\":\"belarus\"}".into()) };

        let reply = controller.handle_event(&event).await.unwrap();
        assert_eq!(reply.receiver, "u1");
        assert_eq!(reply.messages.len(), 1);
        assert_eq!(reply.messages[0].text_content(), Some(texts::GREETING));
        assert_eq!(reply.messages[0].keyboard, Some(Keyboard::standing()));
        assert!(reply.messages[0].tracking_data.is_none());
    }

    #[tokio::test]
    async fn test_subscribed_has_no_keyboard() {
        let controller = offline_controller();
        let reply = controller.handle_event(&ViberEvent::Subscribed { user: user("u2") }).await.unwrap();

        assert_eq!(reply.messages, vec![OutboundMessage::text(texts::SUBSCRIBED)]);
    }

    #[tokio::test]
    async fn test_failed_and_service_events_send_nothing() {
        let controller = offline_controller();
        let failed = ViberEvent::Failed { user_id: "u3".into(), message_token: Some(1), desc: Some("offline".into()) };

        assert!(controller.handle_event(&failed).await.is_none());
        assert!(controller.handle_event(&ViberEvent::Webhook).await.is_none());
        assert!(controller.handle_event(&ViberEvent::Seen { user_id: "u3".into() }).await.is_none());
    }

    #[tokio::test]
    async fn test_unparsable_state_still_advances() {
        let controller = offline_controller();
        let messages = controller
            .handle_message("u4", &text_message(Some("select_country|russia"), Some("not json")))
            .await;

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].tracking_data.as_deref(), Some(r#"{"country":"russia"}"#));
        assert!(messages[0].text_content().unwrap().contains("по следующим профилям"));
    }

    #[tokio::test]
    async fn test_non_text_message_reprompts() {
        let controller = offline_controller();
        let message = InboundMessage {
            kind: "picture".to_string(),
            text: None,
            tracking_data: Some(r#"{"country":"belarus"}"#.to_string()),
        };

        let messages = controller.handle_message("u5", &message).await;
        assert_eq!(messages[0].text_content(), Some(texts::CHOOSE_OPTION));
        assert_eq!(messages[0].tracking_data.as_deref(), Some(r#"{"country":"belarus"}"#));
    }

    #[tokio::test]
    async fn test_unreachable_directory_apologizes() {
        let controller = offline_controller();
        let messages = controller
            .handle_message("u6", &text_message(Some("select_level|junior"), Some(r#"{"country":"belarus","profile":"hr"}"#)))
            .await;

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text_content(), Some(texts::DIRECTORY_UNAVAILABLE));
        assert_eq!(messages[0].tracking_data.as_deref(), Some("{}"));
    }
}
