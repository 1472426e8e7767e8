use std::marker::PhantomData;

use chrono::{serde::ts_seconds, DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation};
use rocket::{
    http::{Cookie, SameSite, Status},
    request::{FromRequest, Outcome},
    time::Duration,
    Request,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, GuardFailure};
use crate::model::registry::SharedRegistry;

use super::user::{Rights, User};

pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

/// An authentication token representing a specific user with specific rights.
#[derive(Serialize, Deserialize)]
pub struct AuthToken<U> {
    pub id: String,
    #[serde(rename = "rgt")]
    pub rights: Rights,
    #[serde(skip)]
    phantom: PhantomData<U>,
}

impl<U> AuthToken<U> {
    /// Does this token permit the given rights?
    pub fn permits(&self, target: Rights) -> bool {
        self.rights == target
    }
}

impl<U> AuthToken<U>
where
    U: User,
{
    /// Create a new [`AuthToken`] for the given user, with the correct rights for that user type.
    pub fn new(user: &U) -> Self {
        Self {
            id: user.id(),
            rights: U::RIGHTS,
            phantom: PhantomData,
        }
    }

    /// Serialize this token into a cookie.
    pub fn into_cookie(self, config: &Config) -> Result<Cookie<'static>, Error> {
        let claims = Claims {
            token: self,
            expire_at: Utc::now() + config.auth_ttl(),
        };

        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret()),
        )?;

        Ok(Cookie::build(AUTH_TOKEN_COOKIE, token)
            .path("/")
            .max_age(Duration::seconds(config.auth_ttl().num_seconds()))
            .http_only(true)
            .same_site(SameSite::Strict)
            .finish())
    }

    /// Deserialize a token from a cookie.
    pub fn from_cookie(cookie: &Cookie<'static>, config: &Config) -> Result<Self, Error> {
        let token = jsonwebtoken::decode(
            cookie.value(),
            &DecodingKey::from_secret(config.jwt_secret()),
            &Validation::default(),
        )
        .map(|claims: TokenData<Claims<U>>| claims.claims.token)?;
        Ok(token)
    }
}

/// Cookie claims: the token itself plus an expiry datetime.
#[derive(Serialize, Deserialize)]
struct Claims<U> {
    #[serde(flatten, bound = "")]
    token: AuthToken<U>,
    #[serde(rename = "exp", with = "ts_seconds")]
    expire_at: DateTime<Utc>,
}

fn denied<T>(req: &Request<'_>, reason: &str) -> Outcome<T, Error> {
    let error = Error::Forbidden(reason.to_string());
    GuardFailure::record(req, &error);
    Outcome::Failure((error.status(), error))
}

impl<U> AuthToken<U>
where
    U: User,
{
    /// Get an [`AuthToken`] from the cookie and verify that it has the correct rights for this
    /// user type, without checking that the user still exists.
    fn from_request_unchecked(req: &Request<'_>) -> Outcome<Self, Error> {
        // Unwrap is safe as `Config` is always managed.
        let config = req.rocket().state::<Config>().unwrap();

        let cookie = match req.cookies().get(AUTH_TOKEN_COOKIE) {
            Some(cookie) => cookie,
            None => return denied(req, "Not logged in"),
        };

        // Decode the token.
        let token: Self = match Self::from_cookie(cookie, config) {
            Ok(token) => token,
            Err(_) => return denied(req, "Invalid or expired session"),
        };

        // Check it represents the correct rights.
        if !token.permits(U::RIGHTS) {
            return denied(req, &format!("Restricted to {} users", U::RIGHTS));
        }

        Outcome::Success(token)
    }
}

#[rocket::async_trait]
impl<'r, U> FromRequest<'r> for AuthToken<U>
where
    U: User + Send,
{
    type Error = Error;

    /// Get an [`AuthToken`] from the cookie and verify that it has the correct rights for this user
    /// type, and that the user it names still exists.
    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let token = match Self::from_request_unchecked(req) {
            Outcome::Success(token) => token,
            Outcome::Failure(failure) => return Outcome::Failure(failure),
            Outcome::Forward(forward) => return Outcome::Forward(forward),
        };

        // Check the user actually exists.
        let exists = match token.rights {
            Rights::Teacher => {
                // Unwrap is safe as the registry is always managed.
                let registry = req.rocket().state::<SharedRegistry>().unwrap();
                let registry = registry.lock().await;
                registry.teacher(&token.id).is_some()
            }
            Rights::Admin => {
                // Unwrap is safe as `Config` is always managed.
                let config = req.rocket().state::<Config>().unwrap();
                token.id == config.admin_username()
            }
        };
        if exists {
            Outcome::Success(token)
        } else {
            denied(req, "Session user no longer exists")
        }
    }
}

/// An [`AuthToken`] whose user may have been deleted since it was issued.
///
/// Routes that look the user up themselves take this instead, so that a
/// deleted user is reported as `404 Not Found` rather than a bad session.
pub struct IssuedToken<U>(pub AuthToken<U>);

#[rocket::async_trait]
impl<'r, U> FromRequest<'r> for IssuedToken<U>
where
    U: User + Send,
{
    type Error = Error;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        AuthToken::<U>::from_request_unchecked(req).map(IssuedToken)
    }
}
