use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Raw admin credentials, received from a user.
#[derive(Clone, Deserialize, Serialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// Check the credentials against the configured admin account.
    pub fn verify(&self, config: &Config) -> Option<Admin> {
        (self.username == config.admin_username() && config.verify_admin_password(&self.password))
            .then(|| Admin {
                username: self.username.clone(),
            })
    }
}

/// The authenticated administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub username: String,
}
