use rocket::{serde::json::Json, Route, State};

use crate::model::{
    catalog::{AxisBooks, Catalog},
    common::Axis,
};

pub fn routes() -> Vec<Route> {
    routes![get_axis_books]
}

/// An unknown axis fails to parse and falls through to the `404` catcher.
#[get("/catalog/<eixo>")]
fn get_axis_books(eixo: Axis, catalog: &State<Catalog>) -> Json<AxisBooks> {
    Json(catalog.books(eixo).clone())
}
