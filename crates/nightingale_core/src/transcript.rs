//! Session transcript types.

use crate::{Role, Turn};
use serde::{Deserialize, Serialize};

/// An append-only record of one session's conversation.
///
/// User turns and assistant turns are pushed in alternation by the
/// front-ends, so after N completed exchanges the transcript holds
/// 2N turns. Failures are recorded as assistant turns carrying the
/// error message, which keeps the pairing intact.
///
/// # Examples
///
/// ```
/// use nightingale_core::{Role, Transcript};
///
/// let mut transcript = Transcript::new();
/// transcript.push_user("勤務表について教えて".to_string());
/// transcript.push_assistant("はい、どのような点でしょうか。".to_string());
///
/// assert_eq!(transcript.len(), 2);
/// assert_eq!(*transcript.turns()[0].role(), Role::User);
/// assert_eq!(*transcript.turns()[1].role(), Role::Assistant);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user turn.
    pub fn push_user(&mut self, content: String) {
        self.turns.push(Turn::new(Role::User, content));
    }

    /// Appends an assistant turn.
    pub fn push_assistant(&mut self, content: String) {
        self.turns.push(Turn::new(Role::Assistant, content));
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns recorded so far.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Removes every turn, starting the session over.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// The most recent assistant turn, if any.
    pub fn last_assistant(&self) -> Option<&Turn> {
        self.turns
            .iter()
            .rev()
            .find(|turn| *turn.role() == Role::Assistant)
    }
}
