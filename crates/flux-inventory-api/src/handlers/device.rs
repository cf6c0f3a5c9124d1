use crate::{
    error::Result,
    extract::{ApiJson, EntityId},
    models::*,
    state::AppState,
};
use axum::{extract::State, Json};
use flux_inventory::{DevicePatch, NewDevice};
use tracing::{debug, info};

/// 创建设备
pub async fn create_device(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewDevice>,
) -> Result<Json<CreatedResponse>> {
    info!(
        name = %req.name,
        location_id = req.location_id,
        api_user_id = req.api_user_id,
        "Creating device"
    );

    let id = state.inventory.devices().create(req).await?;

    Ok(Json(CreatedResponse { id }))
}

/// 获取设备
pub async fn get_device(
    State(state): State<AppState>,
    EntityId(device_id): EntityId,
) -> Result<Json<DeviceResponse>> {
    debug!(device_id, "Getting device");

    let device = state.inventory.devices().get(device_id).await?;

    Ok(Json(DeviceResponse::from(device)))
}

/// 更新设备
pub async fn update_device(
    State(state): State<AppState>,
    EntityId(device_id): EntityId,
    ApiJson(patch): ApiJson<DevicePatch>,
) -> Result<Json<StatusResponse>> {
    info!(device_id, "Updating device");

    state.inventory.devices().update(device_id, patch).await?;

    Ok(Json(StatusResponse::ok()))
}

/// 删除设备
pub async fn delete_device(
    State(state): State<AppState>,
    EntityId(device_id): EntityId,
) -> Result<Json<StatusResponse>> {
    info!(device_id, "Deleting device");

    state.inventory.devices().delete(device_id).await?;

    Ok(Json(StatusResponse::ok()))
}
