//! Participants and the ordered roster

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::LedgerError;

/// A named party in the shared-expense group
///
/// Names are compared exactly; `"alice"` and `"Alice"` are different people.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Creates a participant, rejecting blank names
    pub fn new(name: impl Into<String>) -> Result<Self, LedgerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::InvalidParticipantName(name));
        }
        Ok(Self(name))
    }

    /// Returns the participant's name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Participant {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Ordered list of participants
///
/// Insertion order is the canonical order used for unequal splits and for
/// every balance listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    members: Vec<Participant>,
}

impl Roster {
    /// Creates an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a participant
    ///
    /// # Errors
    ///
    /// - `InvalidParticipantName` if the name is blank
    /// - `DuplicateParticipant` if the name is already present
    pub fn add(&mut self, name: &str) -> Result<&Participant, LedgerError> {
        let participant = Participant::new(name)?;
        if self.contains(name) {
            return Err(LedgerError::DuplicateParticipant(name.to_string()));
        }
        self.members.push(participant);
        Ok(&self.members[self.members.len() - 1])
    }

    /// Returns true if the name is on the roster
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Looks up a participant by name
    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.members.iter().find(|p| p.name() == name)
    }

    /// Looks up a participant, failing with `UnknownParticipant`
    pub fn require(&self, name: &str) -> Result<&Participant, LedgerError> {
        self.get(name)
            .ok_or_else(|| LedgerError::UnknownParticipant(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.members.iter()
    }

    /// Returns the participants as a slice, in roster order
    pub fn as_slice(&self) -> &[Participant] {
        &self.members
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}
