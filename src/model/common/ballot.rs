use serde::{Deserialize, Serialize};

use crate::model::catalog::Category;

/// Books are identified by their catalog code.
pub type BookCode = String;

/// A complete ballot: first and second choice of textbook and of project.
/// Partial ballots cannot be represented; see [`crate::model::api::vote::RawBallot`]
/// for the unvalidated form received from clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub textbook1: BookCode,
    pub textbook2: BookCode,
    pub project1: BookCode,
    pub project2: BookCode,
}

impl Ballot {
    /// The code chosen for the given slot.
    pub fn code(&self, slot: BallotSlot) -> &str {
        match slot {
            BallotSlot::Textbook1 => &self.textbook1,
            BallotSlot::Textbook2 => &self.textbook2,
            BallotSlot::Project1 => &self.project1,
            BallotSlot::Project2 => &self.project2,
        }
    }
}

/// One of the four positions on a ballot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BallotSlot {
    Textbook1,
    Textbook2,
    Project1,
    Project2,
}

impl BallotSlot {
    pub const ALL: [BallotSlot; 4] = [
        Self::Textbook1,
        Self::Textbook2,
        Self::Project1,
        Self::Project2,
    ];

    /// Which catalog category books in this slot must belong to.
    pub fn category(self) -> Category {
        match self {
            Self::Textbook1 | Self::Textbook2 => Category::Textbook,
            Self::Project1 | Self::Project2 => Category::Project,
        }
    }

    /// The JSON field name of this slot.
    pub fn field(self) -> &'static str {
        match self {
            Self::Textbook1 => "textbook1",
            Self::Textbook2 => "textbook2",
            Self::Project1 => "project1",
            Self::Project2 => "project2",
        }
    }
}
