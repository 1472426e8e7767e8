//! API-compatible types.
//!
//! Request bodies are deserialised into loosely-typed structs with optional
//! fields and then validated into model types, so that a missing field is a
//! `400 Bad Request` with a useful message rather than a generic parse failure.

use serde::{Deserialize, Serialize};

pub mod admin;
pub mod auth;
pub mod session;
pub mod teacher;
pub mod vote;

/// A response body carrying only a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
