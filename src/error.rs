use log::{error, warn};
use rocket::{
    http::{Status, StatusClass},
    response::{self, status::Custom, Responder},
    serde::json::Json,
    Request,
};
use thiserror::Error;

use crate::{logging::RequestId, model::api::Message};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0} not found")]
    NotFound(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// The HTTP status this error is reported with.
    pub fn status(&self) -> Status {
        match self {
            Self::Jwt(_) => Status::InternalServerError,
            Self::Validation(_) => Status::BadRequest,
            Self::Unauthorized(_) => Status::Unauthorized,
            Self::Forbidden(_) => Status::Forbidden,
            Self::NotFound(_) => Status::NotFound,
        }
    }
}

/// The reason a request guard rejected a request, kept in the request's local
/// cache so that the catcher can report it.
#[derive(Debug, Default)]
pub struct GuardFailure(Option<(Status, String)>);

impl GuardFailure {
    /// Remember `error` as the reason for the request failing. Only the first
    /// failure of a request is kept.
    pub fn record(req: &Request<'_>, error: &Error) {
        req.local_cache(|| GuardFailure(Some((error.status(), error.to_string()))));
    }

    /// The recorded reason, if a guard failed `req` with `status`.
    pub fn message(req: &Request<'_>, status: Status) -> Option<String> {
        match req.local_cache(GuardFailure::default) {
            GuardFailure(Some((recorded, message))) if *recorded == status => Some(message.clone()),
            _ => None,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        let status = self.status();
        let id = RequestId::of(req);
        if status.class() == StatusClass::ServerError {
            error!("  req{id}: {self}");
        } else {
            warn!("  req{id}: {self}");
        }
        Custom(status, Json(Message::new(self.to_string()))).respond_to(req)
    }
}
