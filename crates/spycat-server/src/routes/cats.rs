use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use spycat_core::{
    params::{CreateCat, UpdateCat},
    Agency, Cat,
};
use uuid::Uuid;

use crate::error::ApiError;

pub async fn list_cats(State(agency): State<Agency>) -> Result<Json<Vec<Cat>>, ApiError> {
    Ok(Json(agency.cats().list_cats().await?))
}

pub async fn get_cat(
    State(agency): State<Agency>,
    Path(cat_id): Path<Uuid>,
) -> Result<Json<Cat>, ApiError> {
    Ok(Json(agency.cats().get_cat(cat_id).await?))
}

pub async fn create_cat(
    State(agency): State<Agency>,
    Json(payload): Json<CreateCat>,
) -> Result<(StatusCode, Json<Cat>), ApiError> {
    let cat = agency.cats().create_cat(&payload).await?;
    Ok((StatusCode::CREATED, Json(cat)))
}

pub async fn update_cat(
    State(agency): State<Agency>,
    Path(cat_id): Path<Uuid>,
    Json(payload): Json<UpdateCat>,
) -> Result<Json<Cat>, ApiError> {
    Ok(Json(agency.cats().update_cat(cat_id, payload).await?))
}

pub async fn delete_cat(
    State(agency): State<Agency>,
    Path(cat_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    agency.cats().delete_cat(cat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Agency> {
    let collection = get(list_cats).post(create_cat);

    Router::new()
        .route("/cats", collection.clone())
        .route("/cats/", collection)
        .route(
            "/cats/{cat_id}",
            get(get_cat).patch(update_cat).delete(delete_cat),
        )
}
