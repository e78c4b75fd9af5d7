//! Server reply envelope

use serde::Deserialize;

/// Body every `/json/*` endpoint answers with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerReply {
    pub result: ReplyResult,
    #[serde(default)]
    pub msg: String,
    /// Machine-readable error code, present on errors
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyResult {
    Success,
    Error,
}

impl ServerReply {
    /// Parse a reply body, ignoring anything that is not the envelope
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    pub fn is_success(&self) -> bool {
        self.result == ReplyResult::Success
    }

    /// Human-readable error message, if the server sent one
    pub fn error_message(&self) -> Option<String> {
        if self.is_success() || self.msg.is_empty() {
            return None;
        }

        Some(match &self.code {
            Some(code) => format!("{} [{code}]", self.msg),
            None => self.msg.clone(),
        })
    }
}
