use crate::{
    error::Result,
    extract::{ApiJson, EntityId},
    models::*,
    state::AppState,
};
use axum::{extract::State, Json};
use flux_inventory::{LocationPatch, NewLocation};
use tracing::{debug, info};

/// 创建位置
pub async fn create_location(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewLocation>,
) -> Result<Json<CreatedResponse>> {
    info!(name = %req.name, "Creating location");

    let id = state.inventory.locations().create(req).await?;

    Ok(Json(CreatedResponse { id }))
}

/// 获取位置
pub async fn get_location(
    State(state): State<AppState>,
    EntityId(location_id): EntityId,
) -> Result<Json<LocationResponse>> {
    debug!(location_id, "Getting location");

    let location = state.inventory.locations().get(location_id).await?;

    Ok(Json(LocationResponse::from(location)))
}

/// 更新位置
pub async fn update_location(
    State(state): State<AppState>,
    EntityId(location_id): EntityId,
    ApiJson(patch): ApiJson<LocationPatch>,
) -> Result<Json<StatusResponse>> {
    info!(location_id, "Updating location");

    state.inventory.locations().update(location_id, patch).await?;

    Ok(Json(StatusResponse::ok()))
}

/// 删除位置
pub async fn delete_location(
    State(state): State<AppState>,
    EntityId(location_id): EntityId,
) -> Result<Json<StatusResponse>> {
    info!(location_id, "Deleting location");

    state.inventory.locations().delete(location_id).await?;

    Ok(Json(StatusResponse::ok()))
}
