mod token;
mod user;

pub use token::{AuthToken, IssuedToken, AUTH_TOKEN_COOKIE};
pub use user::{Rights, User};
