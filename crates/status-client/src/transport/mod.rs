//! Network transport for outbound status requests.

mod http;
mod reply;

pub use http::{HttpTransport, SETTINGS_PATH, UPDATE_STATUS_PATH};
pub use reply::{ReplyResult, ServerReply};
