//! Client services
//!
//! Outbound status requests, the status dialog model, and the dependency
//! container tying them to the local store.

pub mod context;
pub mod editor;
pub mod error;
pub mod status;

#[cfg(test)]
pub(crate) mod mock;

// Re-export all services for convenience
pub use context::{ClientContext, ClientContextBuilder};
pub use editor::{
    PresetDefinition, StatusEditor, StatusPreset, SubmitOutcome, DEFAULT_PRESETS,
    NO_END_TIME_MESSAGE,
};
pub use error::{ServiceError, ServiceResult};
pub use status::StatusService;
