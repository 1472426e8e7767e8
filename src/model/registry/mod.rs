//! The in-memory teacher registry.
//!
//! [`Registry`] holds the teachers in registration order and implements every
//! mutation synchronously. [`SharedRegistry`] is the managed-state handle that
//! serialises access across concurrent requests; each operation acquires the
//! lock once, so lookup-then-insert and lookup-then-overwrite sequences are
//! atomic.

use std::ops::Deref;
use std::sync::Arc;

use log::info;
use rocket::tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{
    catalog::Catalog,
    common::{Ballot, BallotSlot, TeacherId},
};

mod teacher;

pub use teacher::{NewTeacher, Teacher};

/// All registered teachers, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    teachers: Vec<Teacher>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every teacher, in registration order.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Look up a teacher by ID.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|teacher| teacher.id == id)
    }

    /// Find the teacher with the given name (ignoring case), registering them
    /// if there is none. An existing teacher is returned unchanged; the subject
    /// and axis of the request only apply to new registrations.
    pub fn login_or_register(&mut self, new_teacher: NewTeacher) -> &Teacher {
        if let Some(index) = self
            .teachers
            .iter()
            .position(|teacher| teacher.is_named(&new_teacher.name))
        {
            info!("Teacher '{}' logged in", self.teachers[index].name);
            return &self.teachers[index];
        }

        let teacher = Teacher {
            id: self.fresh_id(),
            name: new_teacher.name,
            subjects: vec![new_teacher.subject],
            eixo: new_teacher.eixo,
            vote: None,
        };
        info!("Registered teacher '{}' with ID {}", teacher.name, teacher.id);
        self.teachers.push(teacher);
        // Just pushed, so the list is non-empty.
        &self.teachers[self.teachers.len() - 1]
    }

    /// Store `ballot` as the vote of teacher `teacher_id`, replacing any
    /// previous vote. The caller must be that same teacher, and the ballot must
    /// only name books of the teacher's axis, with distinct first and second
    /// choices in each category. Nothing changes unless the vote is accepted.
    pub fn submit_vote(
        &mut self,
        caller: &str,
        teacher_id: &str,
        ballot: Ballot,
        catalog: &Catalog,
    ) -> Result<&Teacher> {
        if caller != teacher_id {
            return Err(Error::Forbidden(
                "Teachers may only vote for themselves".to_string(),
            ));
        }
        let teacher = self
            .teachers
            .iter_mut()
            .find(|teacher| teacher.id == teacher_id)
            .ok_or_else(|| Error::not_found(format!("Teacher {teacher_id}")))?;

        for slot in BallotSlot::ALL {
            let code = ballot.code(slot);
            if !catalog.contains(teacher.eixo, slot.category(), code) {
                return Err(Error::validation(format!(
                    "Book {code} cannot be chosen as {} in axis '{}'",
                    slot.field(),
                    teacher.eixo
                )));
            }
        }
        if ballot.textbook1 == ballot.textbook2 || ballot.project1 == ballot.project2 {
            return Err(Error::validation(
                "First and second choices must be different books",
            ));
        }

        teacher.vote = Some(ballot);
        info!("Recorded vote for teacher {teacher_id}");
        Ok(&*teacher)
    }

    /// Remove a teacher and their vote.
    pub fn delete_teacher(&mut self, id: &str) -> Result<Teacher> {
        let index = self
            .teachers
            .iter()
            .position(|teacher| teacher.id == id)
            .ok_or_else(|| Error::not_found(format!("Teacher {id}")))?;
        let teacher = self.teachers.remove(index);
        info!("Deleted teacher '{}' ({id})", teacher.name);
        Ok(teacher)
    }

    /// Discard every vote, keeping the teachers.
    pub fn reset_votes(&mut self) {
        for teacher in self.teachers.iter_mut() {
            teacher.vote = None;
        }
        info!("Reset votes of all {} teachers", self.teachers.len());
    }

    /// Remove every teacher.
    pub fn reset_all(&mut self) {
        self.teachers.clear();
        info!("Reset the registry");
    }

    /// Generate an ID not used by any current teacher.
    fn fresh_id(&self) -> TeacherId {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.teacher(&id).is_none() {
                return id;
            }
        }
    }
}

/// The registry as held in Rocket's managed state.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry(Arc<Mutex<Registry>>);

impl Deref for SharedRegistry {
    type Target = Mutex<Registry>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
