#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{Build, Rocket};

use crate::config::ConfigFairing;
use crate::logging::LoggerFairing;
use crate::model::{catalog::CatalogFairing, registry::SharedRegistry};

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::Config;

/// Build a rocket with an empty registry, configured from `Rocket.toml` and
/// the environment.
pub fn build() -> Rocket<Build> {
    assemble(rocket::build(), SharedRegistry::default())
}

/// Attach fairings, state, routes and catchers to a base rocket.
///
/// The fairings are order-dependent: the catalog reads the config.
fn assemble(rocket: Rocket<Build>, registry: SharedRegistry) -> Rocket<Build> {
    rocket
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .attach(CatalogFairing)
        .manage(registry)
        .mount("/api", api::routes())
        .register("/", api::catchers())
}

/// A rocket with fixed test configuration, sharing the given registry so that
/// tests can inspect and seed it directly.
#[cfg(test)]
pub(crate) fn test_rocket(registry: SharedRegistry) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("auth_ttl", 3600))
        .merge(("jwt_secret", "test secret that is long enough for HS256 signing"))
        .merge(("admin_username", config::TEST_ADMIN_USERNAME))
        .merge(("admin_password_hash", config::test_admin_password_hash()))
        .merge(("log_level", "off"));
    assemble(rocket::custom(figment), registry)
}
