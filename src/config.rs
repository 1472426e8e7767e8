use chrono::Duration;
use log::{error, warn};
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Deserialize)]
pub struct Config {
    // non-secrets
    auth_ttl: u32,
    admin_username: String,
    catalog_path: Option<String>,
    // secrets
    jwt_secret: String,
    admin_password_hash: String,
}

impl Config {
    /// Valid lifetime of auth token cookies in seconds.
    pub fn auth_ttl(&self) -> Duration {
        Duration::seconds(self.auth_ttl.into())
    }

    /// Secret key used to sign JWTs.
    pub fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Username of the single administrator account.
    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    /// Check a candidate password against the configured admin password hash.
    pub fn verify_admin_password(&self, password: &str) -> bool {
        match argon2::verify_encoded(&self.admin_password_hash, password.as_bytes()) {
            Ok(matches) => matches,
            Err(e) => {
                error!("Configured admin password hash is unusable: {e}");
                false
            }
        }
    }

    /// Optional path to a JSON catalog replacing the built-in one.
    pub fn catalog_path(&self) -> Option<&str> {
        self.catalog_path.as_deref()
    }
}

/// A fairing that loads the application config and puts it in managed state.
/// This could easily be achieved using `AdHoc::config`, but is written out
/// explicitly for symmetry with the other fairings and control over error
/// messages.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        if config.jwt_secret.len() < 32 {
            warn!("`jwt_secret` is shorter than 32 bytes; session tokens are weakly protected");
        }

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}


#[cfg(test)]
pub use examples::{test_admin_password_hash, TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_password_verification() {
        let config = Config::example();
        assert!(config.verify_admin_password(TEST_ADMIN_PASSWORD));
        assert!(!config.verify_admin_password("wrong"));
        assert!(!config.verify_admin_password(""));
    }

    #[test]
    fn malformed_hash_never_matches() {
        let config = Config {
            admin_password_hash: "not a hash".to_string(),
            ..Config::example()
        };
        assert!(!config.verify_admin_password(TEST_ADMIN_PASSWORD));
    }
}
