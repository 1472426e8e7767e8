//! Vote reports: per-axis winners and per-teacher vote listings.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{
    catalog::{Book, Catalog},
    common::{Axis, Ballot, BallotSlot, BookCode, TeacherId},
    registry::Teacher,
};

/// The most voted code among `codes`, with its count.
///
/// Ties go to whichever of the tied codes appeared first. `None` if there are
/// no codes at all.
pub fn tally<'a>(codes: impl IntoIterator<Item = &'a str>) -> Option<(&'a str, u32)> {
    // Counts in order of first appearance, with an index for lookup.
    let mut counts: Vec<(&str, u32)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for code in codes {
        match index.get(code) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(code, counts.len());
                counts.push((code, 1));
            }
        }
    }

    counts
        .into_iter()
        .fold(None, |best, (code, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((code, count)),
        })
}

/// The winning book of one ballot slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    pub code: BookCode,
    pub votes: u32,
    /// `None` if the code is not in the catalog.
    pub book: Option<Book>,
}

/// Winners of each slot within one axis. A slot nobody voted in has no winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisReport {
    pub eixo: Axis,
    /// How many teachers of this axis have voted.
    pub ballots: usize,
    pub textbook1: Option<Winner>,
    pub textbook2: Option<Winner>,
    pub project1: Option<Winner>,
    pub project2: Option<Winner>,
}

/// Compute the consolidated report: one entry per axis, in axis order.
pub fn consolidated(teachers: &[Teacher], catalog: &Catalog) -> Vec<AxisReport> {
    Axis::ALL
        .into_iter()
        .map(|axis| {
            let ballots: Vec<&Ballot> = teachers
                .iter()
                .filter(|teacher| teacher.eixo == axis)
                .filter_map(|teacher| teacher.vote.as_ref())
                .collect();
            let winner = |slot: BallotSlot| {
                tally(ballots.iter().map(|ballot| ballot.code(slot))).map(|(code, votes)| Winner {
                    code: code.to_string(),
                    votes,
                    book: catalog.book(code).cloned(),
                })
            };
            AxisReport {
                eixo: axis,
                ballots: ballots.len(),
                textbook1: winner(BallotSlot::Textbook1),
                textbook2: winner(BallotSlot::Textbook2),
                project1: winner(BallotSlot::Project1),
                project2: winner(BallotSlot::Project2),
            }
        })
        .collect()
}

/// Whether a teacher has voted yet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteStatus {
    Registered,
    Pending,
}

/// One chosen book, resolved against the catalog where possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub code: BookCode,
    pub book: Option<Book>,
}

/// The four choices of a registered vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choices {
    pub textbook1: Choice,
    pub textbook2: Choice,
    pub project1: Choice,
    pub project2: Choice,
}

impl Choices {
    fn resolve(ballot: &Ballot, catalog: &Catalog) -> Self {
        let choice = |slot: BallotSlot| {
            let code = ballot.code(slot);
            Choice {
                code: code.to_string(),
                book: catalog.book(code).cloned(),
            }
        };
        Self {
            textbook1: choice(BallotSlot::Textbook1),
            textbook2: choice(BallotSlot::Textbook2),
            project1: choice(BallotSlot::Project1),
            project2: choice(BallotSlot::Project2),
        }
    }
}

/// A single teacher's entry in the individual report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherReport {
    pub id: TeacherId,
    pub name: String,
    pub eixo: Axis,
    pub status: VoteStatus,
    /// Present if and only if the status is registered.
    pub choices: Option<Choices>,
}

/// Compute the individual report: every teacher, in registration order.
pub fn individual(teachers: &[Teacher], catalog: &Catalog) -> Vec<TeacherReport> {
    teachers
        .iter()
        .map(|teacher| {
            let choices = teacher
                .vote
                .as_ref()
                .map(|ballot| Choices::resolve(ballot, catalog));
            TeacherReport {
                id: teacher.id.clone(),
                name: teacher.name.clone(),
                eixo: teacher.eixo,
                status: if choices.is_some() {
                    VoteStatus::Registered
                } else {
                    VoteStatus::Pending
                },
                choices,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::common::Subject;

    fn teacher(id: &str, eixo: Axis, vote: Option<Ballot>) -> Teacher {
        Teacher {
            id: id.into(),
            name: format!("Teacher {id}"),
            subjects: vec![Subject::Art],
            eixo,
            vote,
        }
    }

    #[test]
    fn tally_picks_most_frequent() {
        assert_eq!(Some(("B1", 2)), tally(["B1", "B2", "B1"]));
        assert_eq!(Some(("B3", 3)), tally(["B1", "B3", "B2", "B3", "B3", "B1"]));
    }

    #[test]
    fn tally_ties_go_to_first_seen() {
        assert_eq!(Some(("B2", 2)), tally(["B2", "B1", "B1", "B2"]));
        assert_eq!(Some(("Z", 1)), tally(["Z", "A", "M"]));
    }

    #[test]
    fn tally_of_nothing() {
        assert_eq!(None, tally(std::iter::empty()));
    }

    #[test]
    fn consolidated_counts_per_axis_and_slot() {
        let catalog = Catalog::example();
        let teachers = vec![
            teacher("1", Axis::Humanities, Some(Ballot::with_codes("B1", "B4", "P1", "P2"))),
            teacher("2", Axis::Humanities, Some(Ballot::with_codes("B2", "B4", "P2", "P1"))),
            teacher("3", Axis::Humanities, None),
            teacher("4", Axis::Humanities, Some(Ballot::with_codes("B1", "B5", "P2", "P1"))),
            // Other axes never count towards humanities.
            teacher("5", Axis::Mathematics, Some(Ballot::with_codes("B2", "B2", "B2", "B2"))),
            teacher("6", Axis::Mathematics, Some(Ballot::with_codes("B2", "B2", "B2", "B2"))),
        ];

        let report = consolidated(&teachers, &catalog);
        assert_eq!(
            report.iter().map(|r| r.eixo).collect::<Vec<_>>(),
            Axis::ALL.to_vec()
        );

        let humanities = &report[0];
        assert_eq!(3, humanities.ballots);
        let textbook1 = humanities.textbook1.as_ref().unwrap();
        assert_eq!(("B1", 2), (textbook1.code.as_str(), textbook1.votes));
        assert_eq!(None, textbook1.book);
        assert_eq!("B4", humanities.textbook2.as_ref().unwrap().code);
        assert_eq!("P2", humanities.project1.as_ref().unwrap().code);
        assert_eq!("P1", humanities.project2.as_ref().unwrap().code);

        let mathematics = &report[3];
        assert_eq!(2, mathematics.ballots);
        assert_eq!(2, mathematics.project2.as_ref().unwrap().votes);
    }

    #[test]
    fn consolidated_without_votes_has_no_winners() {
        let catalog = Catalog::example();
        let teachers = vec![teacher("1", Axis::Languages, None)];

        for axis_report in consolidated(&teachers, &catalog) {
            assert_eq!(0, axis_report.ballots);
            assert_eq!(None, axis_report.textbook1);
            assert_eq!(None, axis_report.textbook2);
            assert_eq!(None, axis_report.project1);
            assert_eq!(None, axis_report.project2);
        }
    }

    #[test]
    fn consolidated_tie_follows_registration_order() {
        let catalog = Catalog::example();
        let teachers = vec![
            teacher("1", Axis::Computing, Some(Ballot::with_codes("B9", "x", "x", "x"))),
            teacher("2", Axis::Computing, Some(Ballot::with_codes("B1", "x", "x", "x"))),
        ];
        let report = consolidated(&teachers, &catalog);
        assert_eq!("B9", report[4].textbook1.as_ref().unwrap().code);
    }

    #[test]
    fn consolidated_resolves_books() {
        let catalog = Catalog::example();
        let teachers = vec![teacher("1", Axis::Humanities, Some(Ballot::example()))];
        let report = consolidated(&teachers, &catalog);
        let winner = report[0].textbook1.as_ref().unwrap();
        assert_eq!(catalog.book("0201P26011"), winner.book.as_ref());
    }

    #[test]
    fn individual_marks_pending_iff_no_ballot() {
        let catalog = Catalog::example();
        let teachers = vec![
            teacher("1", Axis::Humanities, Some(Ballot::example())),
            teacher("2", Axis::NaturalSciences, None),
            teacher("3", Axis::Humanities, Some(Ballot::with_codes("?", "?", "?", "?"))),
        ];

        let report = individual(&teachers, &catalog);
        assert_eq!(3, report.len());
        for (entry, teacher) in report.iter().zip(&teachers) {
            assert_eq!(entry.id, teacher.id);
            assert_eq!(entry.status == VoteStatus::Pending, teacher.vote.is_none());
            assert_eq!(entry.choices.is_some(), teacher.vote.is_some());
        }

        let choices = report[0].choices.as_ref().unwrap();
        assert_eq!(catalog.book("0211P26041"), choices.project1.book.as_ref());
        let unknown = report[2].choices.as_ref().unwrap();
        assert_eq!("?", unknown.textbook1.code);
        assert_eq!(None, unknown.textbook1.book);
    }

    #[test]
    fn individual_of_empty_registry() {
        assert!(individual(&[], &Catalog::example()).is_empty());
    }
}
