use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use spycat_core::{
    params::{CreateMission, UpdateMission, UpdateTarget},
    Agency, Mission, Target,
};
use uuid::Uuid;

use crate::error::ApiError;

pub async fn list_missions(State(agency): State<Agency>) -> Result<Json<Vec<Mission>>, ApiError> {
    Ok(Json(agency.missions().list_missions().await?))
}

pub async fn get_mission(
    State(agency): State<Agency>,
    Path(mission_id): Path<Uuid>,
) -> Result<Json<Mission>, ApiError> {
    Ok(Json(agency.missions().get_mission(mission_id).await?))
}

/// Creation answers with an empty (`null`) body; clients list missions to
/// discover the new one.
pub async fn create_mission(
    State(agency): State<Agency>,
    Json(payload): Json<CreateMission>,
) -> Result<(StatusCode, Json<()>), ApiError> {
    agency.missions().create_mission(&payload).await?;
    Ok((StatusCode::CREATED, Json(())))
}

pub async fn update_mission(
    State(agency): State<Agency>,
    Path(mission_id): Path<Uuid>,
    Json(payload): Json<UpdateMission>,
) -> Result<Json<Mission>, ApiError> {
    Ok(Json(
        agency
            .missions()
            .update_mission(mission_id, &payload)
            .await?,
    ))
}

pub async fn delete_mission(
    State(agency): State<Agency>,
    Path(mission_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    agency.missions().delete_mission(mission_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_target(
    State(agency): State<Agency>,
    Path(target_id): Path<Uuid>,
    Json(payload): Json<UpdateTarget>,
) -> Result<Json<Target>, ApiError> {
    Ok(Json(
        agency.missions().update_target(target_id, payload).await?,
    ))
}

pub fn router() -> Router<Agency> {
    let collection = get(list_missions).post(create_mission);

    Router::new()
        .route("/missions", collection.clone())
        .route("/missions/", collection)
        .route(
            "/missions/{mission_id}",
            get(get_mission).patch(update_mission).delete(delete_mission),
        )
        .route("/missions/mission/target/{target_id}", patch(update_target))
}
