use crate::config::ArtistlyConfig;
use serde::Serialize;

pub mod artists;
pub mod config;
pub mod dashboard;
pub mod home;
pub mod onboard;
pub mod respond;
pub mod routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The render-ready content of one page.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Page {
    Home(home::HomePage),
    Artists(artists::ArtistsPage),
    Dashboard(dashboard::DashboardPage),
    Onboard(onboard::OnboardPage),
    Routes(routes::RoutesPage),
    Respond(respond::RespondPage),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub page: Option<Page>,
    pub config: Option<ArtistlyConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: ArtistlyConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is an error. The CLI exits non-zero on these.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_detected_among_messages() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("fine"));
        assert!(!result.has_errors());
        result.add_message(CmdMessage::error("broken"));
        assert!(result.has_errors());
    }

    #[test]
    fn message_levels_serialize_lowercase() {
        let json = serde_json::to_string(&CmdMessage::warning("careful")).unwrap();
        assert_eq!(json, r#"{"level":"warning","content":"careful"}"#);
    }
}
