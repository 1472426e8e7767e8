use serde::{Deserialize, Serialize};

use crate::model::common::{Axis, Ballot, Subject, TeacherId};

/// A validated registration: everything needed to create a teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    /// Trimmed, non-empty display name.
    pub name: String,
    pub subject: Subject,
    pub eixo: Axis,
}

/// A registered teacher and their ballot, if they have voted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub subjects: Vec<Subject>,
    pub eixo: Axis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<Ballot>,
}

impl Teacher {
    /// Does this teacher go by the given name, ignoring case?
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn has_voted(&self) -> bool {
        self.vote.is_some()
    }
}
