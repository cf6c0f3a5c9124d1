use crate::{
    error::Result,
    extract::{ApiJson, EntityId},
    models::*,
    state::AppState,
};
use axum::{extract::State, Json};
use flux_inventory::{ApiUserPatch, NewApiUser};
use tracing::{debug, info};

/// 创建 API 用户
pub async fn create_api_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewApiUser>,
) -> Result<Json<CreatedResponse>> {
    info!(name = %req.name, "Creating api user");

    let id = state.inventory.api_users().create(req).await?;

    Ok(Json(CreatedResponse { id }))
}

/// 获取 API 用户
pub async fn get_api_user(
    State(state): State<AppState>,
    EntityId(user_id): EntityId,
) -> Result<Json<ApiUserResponse>> {
    debug!(user_id, "Getting api user");

    let user = state.inventory.api_users().get(user_id).await?;

    Ok(Json(ApiUserResponse::from(user)))
}

/// 更新 API 用户
pub async fn update_api_user(
    State(state): State<AppState>,
    EntityId(user_id): EntityId,
    ApiJson(patch): ApiJson<ApiUserPatch>,
) -> Result<Json<StatusResponse>> {
    info!(user_id, "Updating api user");

    state.inventory.api_users().update(user_id, patch).await?;

    Ok(Json(StatusResponse::ok()))
}

/// 删除 API 用户
pub async fn delete_api_user(
    State(state): State<AppState>,
    EntityId(user_id): EntityId,
) -> Result<Json<StatusResponse>> {
    info!(user_id, "Deleting api user");

    state.inventory.api_users().delete(user_id).await?;

    Ok(Json(StatusResponse::ok()))
}
