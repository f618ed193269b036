//! Event and chat records attached to participants.
//!
//! The replay decoder produces these while streaming through the game and
//! message files; this crate only stores them.

/// Broad category of a game event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Camera movement
    Camera,
    /// Ability or command use
    Ability,
    /// Unit selection change
    Selection,
    /// Anything else
    Other,
}

/// A game event generated by a participant
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Game frame the event happened on
    pub frame: u32,
    /// Participant that generated the event
    pub pid: u8,
    /// Event category
    pub kind: EventKind,
    /// Decoder-specific event name
    pub name: String,
}

impl Event {
    /// Create a new event
    pub fn new(frame: u32, pid: u8, kind: EventKind, name: impl Into<String>) -> Self {
        Self {
            frame,
            pid,
            kind,
            name: name.into(),
        }
    }

    /// Game time in seconds at normal speed (16 frames per second)
    pub fn second(&self) -> u32 {
        self.frame >> 4
    }
}

/// Recipients of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageTarget {
    /// Everyone in the game
    All,
    /// The sender's team
    Allies,
    /// Observers only
    Observers,
}

/// A chat message sent during the game
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Game frame the message was sent on
    pub frame: u32,
    /// Sender
    pub pid: u8,
    /// Recipients
    pub target: MessageTarget,
    /// Message text
    pub text: String,
}

impl Message {
    /// Create a new chat message
    pub fn new(frame: u32, pid: u8, target: MessageTarget, text: impl Into<String>) -> Self {
        Self {
            frame,
            pid,
            target,
            text: text.into(),
        }
    }
}
