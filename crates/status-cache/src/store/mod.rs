//! User status storage module.

mod status_store;

pub use status_store::{SharedStatusStore, StatusStore};
