//! # status-client
//!
//! Application layer: sends status updates to the server, models the status
//! dialog, and keeps the local status store in sync.

pub mod services;
pub mod transport;

pub use services::{
    ClientContext, ClientContextBuilder, ServiceError, ServiceResult, StatusEditor,
    StatusService, SubmitOutcome,
};
pub use transport::HttpTransport;
