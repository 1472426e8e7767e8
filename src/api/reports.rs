use rocket::{serde::json::Json, Route, State};

use crate::model::{
    api::{admin::Admin, auth::AuthToken},
    catalog::Catalog,
    registry::SharedRegistry,
    report::{self, AxisReport, TeacherReport},
};

pub fn routes() -> Vec<Route> {
    routes![consolidated, individual]
}

#[get("/reports/consolidated")]
async fn consolidated(
    _token: AuthToken<Admin>,
    registry: &State<SharedRegistry>,
    catalog: &State<Catalog>,
) -> Json<Vec<AxisReport>> {
    let registry = registry.lock().await;
    Json(report::consolidated(registry.teachers(), catalog))
}

#[get("/reports/individual")]
async fn individual(
    _token: AuthToken<Admin>,
    registry: &State<SharedRegistry>,
    catalog: &State<Catalog>,
) -> Json<Vec<TeacherReport>> {
    let registry = registry.lock().await;
    Json(report::individual(registry.teachers(), catalog))
}
