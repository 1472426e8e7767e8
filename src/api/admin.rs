use rocket::{serde::json::Json, Route, State};

use crate::model::{
    api::{admin::Admin, auth::AuthToken, Message},
    registry::{SharedRegistry, Teacher},
};

pub fn routes() -> Vec<Route> {
    routes![reset_votes, reset_all]
}

#[post("/admin/reset-votes")]
async fn reset_votes(
    _token: AuthToken<Admin>,
    registry: &State<SharedRegistry>,
) -> Json<Vec<Teacher>> {
    let mut registry = registry.lock().await;
    registry.reset_votes();
    Json(registry.teachers().to_vec())
}

#[post("/admin/reset-all")]
async fn reset_all(_token: AuthToken<Admin>, registry: &State<SharedRegistry>) -> Json<Message> {
    registry.lock().await.reset_all();
    Json(Message::new("All data has been reset"))
}
