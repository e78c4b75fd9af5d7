//! Traits (ports) implemented by infrastructure crates

mod ports;

pub use ports::{EmojiResolver, PortResult, StatusTransport};
