//! One logged-in user's interaction, bounded by login and logout.
//!
//! The presentation layer owns the `Session` and passes it by reference into
//! core operations; nothing here talks to the network or the credential
//! table. Turns alternate user/assistant in call order and are never edited
//! in place; the only removal is clearing the whole transcript at logout.

use crate::llm::{ChatTurn, Role};

#[derive(Clone, Debug, Default)]
pub struct Session {
    username: Option<String>,
    turns: Vec<ChatTurn>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Begin a session for `username`. Always starts with an empty
    /// transcript, even if the caller skipped `logout`.
    pub fn login(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
        self.turns.clear();
    }

    /// Clear the login flag, username and every recorded turn.
    pub fn logout(&mut self) {
        self.username = None;
        self.turns.clear();
    }

    pub fn record_user(&mut self, content: impl Into<String>) {
        debug_assert!(
            !matches!(self.turns.last(), Some(t) if t.role == Role::User),
            "user turns must alternate with assistant turns"
        );
        self.turns.push(ChatTurn::user(content));
    }

    pub fn record_assistant(&mut self, content: impl Into<String>) {
        debug_assert!(
            matches!(self.turns.last(), Some(t) if t.role == Role::User),
            "an assistant turn must answer a user turn"
        );
        self.turns.push(ChatTurn::assistant(content));
    }

    /// The ordered transcript for the current session.
    pub fn transcript(&self) -> &[ChatTurn] {
        &self.turns
    }
}
