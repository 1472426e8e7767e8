use serde::Serialize;

use crate::model::registry::Teacher;

/// Who the current session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub is_admin: bool,
    pub teacher: Option<Teacher>,
}

impl SessionInfo {
    pub fn admin() -> Self {
        Self {
            is_admin: true,
            teacher: None,
        }
    }

    pub fn teacher(teacher: Teacher) -> Self {
        Self {
            is_admin: false,
            teacher: Some(teacher),
        }
    }
}
