//! Turn types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single turn in a conversation.
///
/// # Examples
///
/// ```
/// use nightingale_core::{Role, Turn};
///
/// let turn = Turn::new(Role::User, "こんにちは".to_string());
///
/// assert_eq!(*turn.role(), Role::User);
/// assert_eq!(turn.content(), "こんにちは");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Turn {
    /// The role of the turn's author
    role: Role,
    /// The text of the turn
    content: String,
}

impl Turn {
    /// Creates a new turn with the given role and content.
    pub fn new(role: Role, content: String) -> Self {
        Self { role, content }
    }

    /// Returns a builder for constructing a Turn.
    pub fn builder() -> TurnBuilder {
        TurnBuilder::default()
    }
}
