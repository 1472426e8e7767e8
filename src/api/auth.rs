use log::warn;
use rocket::{
    http::{Cookie, CookieJar},
    serde::json::Json,
    Route, State,
};

use crate::{
    error::{Error, Result},
    model::{
        api::{
            admin::{Admin, AdminCredentials},
            auth::{AuthToken, AUTH_TOKEN_COOKIE},
            session::SessionInfo,
            teacher::LoginRequest,
            Message,
        },
        registry::{NewTeacher, SharedRegistry, Teacher},
    },
    Config,
};

pub fn routes() -> Vec<Route> {
    routes![login_register, admin_login, logout, session]
}

#[post("/auth/login-register", data = "<request>", format = "json")]
pub async fn login_register(
    request: Json<LoginRequest>,
    cookies: &CookieJar<'_>,
    registry: &State<SharedRegistry>,
    config: &State<Config>,
) -> Result<Json<Teacher>> {
    let new_teacher = NewTeacher::try_from(request.into_inner())?;
    let teacher = registry.lock().await.login_or_register(new_teacher).clone();

    // Replaces any session the client already had.
    let token = AuthToken::new(&teacher);
    cookies.add(token.into_cookie(config)?);

    Ok(Json(teacher))
}

#[post("/auth/admin-login", data = "<credentials>", format = "json")]
pub async fn admin_login(
    credentials: Json<AdminCredentials>,
    cookies: &CookieJar<'_>,
    config: &State<Config>,
) -> Result<Json<Message>> {
    let admin: Admin = credentials.verify(config).ok_or_else(|| {
        warn!("Failed admin login for user '{}'", credentials.username);
        Error::Unauthorized("Incorrect username or password".to_string())
    })?;

    let token = AuthToken::new(&admin);
    cookies.add(token.into_cookie(config)?);

    Ok(Json(Message::new("Admin login successful")))
}

#[post("/auth/logout")]
pub fn logout(cookies: &CookieJar<'_>) -> Json<Message> {
    cookies.remove(Cookie::named(AUTH_TOKEN_COOKIE));
    Json(Message::new("Logged out"))
}

#[get("/auth/session")]
pub async fn session(
    admin: Option<AuthToken<Admin>>,
    teacher: Option<AuthToken<Teacher>>,
    registry: &State<SharedRegistry>,
) -> Result<Json<SessionInfo>> {
    if admin.is_some() {
        return Ok(Json(SessionInfo::admin()));
    }
    if let Some(token) = teacher {
        if let Some(teacher) = registry.lock().await.teacher(&token.id) {
            return Ok(Json(SessionInfo::teacher(teacher.clone())));
        }
    }
    Err(Error::Unauthorized("No active session".to_string()))
}
