use std::fmt::Display;

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::model::{api::admin::Admin, registry::Teacher};

/// A user of our application, having defined rights.
pub trait User {
    /// The rights of this user type.
    const RIGHTS: Rights;
    /// Get the user's ID.
    fn id(&self) -> String;
}

/// Different privilege levels.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Rights {
    Teacher = 0,
    Admin = 1,
}

impl Display for Rights {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Self::Teacher => "teacher",
                Self::Admin => "admin",
            }
        )
    }
}

impl User for Teacher {
    const RIGHTS: Rights = Rights::Teacher;

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// The admin is identified by username, as there is only ever one.
impl User for Admin {
    const RIGHTS: Rights = Rights::Admin;

    fn id(&self) -> String {
        self.username.clone()
    }
}
