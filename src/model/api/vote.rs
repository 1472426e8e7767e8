use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::common::{Ballot, BallotSlot};

/// The body of a vote submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteRequest {
    pub vote: Option<RawBallot>,
}

/// A ballot as received from a client, possibly incomplete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBallot {
    pub textbook1: Option<String>,
    pub textbook2: Option<String>,
    pub project1: Option<String>,
    pub project2: Option<String>,
}

impl RawBallot {
    fn slot(&self, slot: BallotSlot) -> Option<&str> {
        match slot {
            BallotSlot::Textbook1 => self.textbook1.as_deref(),
            BallotSlot::Textbook2 => self.textbook2.as_deref(),
            BallotSlot::Project1 => self.project1.as_deref(),
            BallotSlot::Project2 => self.project2.as_deref(),
        }
        .filter(|code| !code.trim().is_empty())
    }
}

impl TryFrom<VoteRequest> for Ballot {
    type Error = Error;

    fn try_from(request: VoteRequest) -> Result<Self> {
        request
            .vote
            .ok_or_else(|| Error::validation("Missing vote"))?
            .try_into()
    }
}

impl TryFrom<RawBallot> for Ballot {
    type Error = Error;

    /// All four choices must be present; a partial ballot is never accepted.
    fn try_from(raw: RawBallot) -> Result<Self> {
        let missing: Vec<&str> = BallotSlot::ALL
            .into_iter()
            .filter(|slot| raw.slot(*slot).is_none())
            .map(BallotSlot::field)
            .collect();
        if !missing.is_empty() {
            return Err(Error::validation(format!(
                "All four choices are required; missing {}",
                missing.join(", ")
            )));
        }

        let code = |slot| raw.slot(slot).unwrap_or_default().trim().to_string();
        Ok(Self {
            textbook1: code(BallotSlot::Textbook1),
            textbook2: code(BallotSlot::Textbook2),
            project1: code(BallotSlot::Project1),
            project2: code(BallotSlot::Project2),
        })
    }
}
