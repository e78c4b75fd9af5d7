//! Value objects - immutable types that represent domain concepts

mod time_key;
mod user_id;

pub use time_key::TimeKey;
pub use user_id::{UserId, UserIdParseError};
