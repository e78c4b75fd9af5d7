//! Inbound events consumed by the status cache

mod user_status_event;

pub use user_status_event::{UserStatusEvent, USER_STATUS_EVENT_TYPE};
