use crate::constants::{MSG_COMPLETE_FAILED, MSG_CONTEXT_FAILED, MSG_GENERATE_FAILED};

/// The three backend calls a session can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadContext,
    GenerateQuest,
    CompleteTask,
}

impl Operation {
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::LoadContext => MSG_CONTEXT_FAILED,
            Self::GenerateQuest => MSG_GENERATE_FAILED,
            Self::CompleteTask => MSG_COMPLETE_FAILED,
        }
    }
}

/// Failure of a single backend call.
///
/// None of these are fatal: the session records a message and waits for the
/// user to try again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}{}", status_suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("Response decoding error: {0}")]
    Decode(String),
}

fn status_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl QuestError {
    #[must_use]
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status {
            status,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// Message shown in the error banner for a failed `operation`.
    ///
    /// Only quest generation surfaces the server's own `error` text; the other
    /// calls always fall back to their generic copy.
    #[must_use]
    pub fn user_message(&self, operation: Operation) -> String {
        match (operation, self) {
            (
                Operation::GenerateQuest,
                Self::Status {
                    message: Some(message),
                    ..
                },
            ) => message.clone(),
            _ => operation.fallback_message().to_string(),
        }
    }
}

impl From<serde_json::Error> for QuestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_prefers_server_message() {
        let err = QuestError::status(500, Some("OpenAI quota exceeded".into()));
        assert_eq!(
            err.user_message(Operation::GenerateQuest),
            "OpenAI quota exceeded"
        );
        assert_eq!(
            err.user_message(Operation::CompleteTask),
            MSG_COMPLETE_FAILED
        );
    }

    #[test]
    fn blank_server_message_falls_back() {
        let err = QuestError::status(502, Some("   ".into()));
        assert_eq!(err.user_message(Operation::GenerateQuest), MSG_GENERATE_FAILED);
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn network_errors_use_generic_copy() {
        let err = QuestError::Network("connection refused".into());
        assert_eq!(err.user_message(Operation::LoadContext), MSG_CONTEXT_FAILED);
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
