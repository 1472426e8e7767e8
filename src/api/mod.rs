use rocket::{
    http::Status,
    response::status::Custom,
    serde::json::Json,
    Catcher, Request, Route,
};

use crate::{error::GuardFailure, model::api::Message};

mod admin;
mod auth;
mod catalog;
mod reports;
mod teachers;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(auth::routes());
    routes.extend(teachers::routes());
    routes.extend(admin::routes());
    routes.extend(catalog::routes());
    routes.extend(reports::routes());
    routes
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

/// Give unmatched requests and failed guards the same body as other errors.
#[catch(default)]
fn default_catcher(status: Status, req: &Request) -> Custom<Json<Message>> {
    let message = GuardFailure::message(req, status)
        .unwrap_or_else(|| status.reason().unwrap_or("Unknown error").to_string());
    Custom(status, Json(Message::new(message)))
}
