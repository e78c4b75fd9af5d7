//! Integration test utilities for the status client
//!
//! This crate provides a stub chat server that records what the client sends,
//! plus fixtures for configs, snapshots, and events.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
