//! Core types shared across agrtyper crates

pub mod result;

pub use result::{TypingResult, UNKNOWN_GROUP};
