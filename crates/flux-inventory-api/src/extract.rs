//! 请求提取器：把 axum 的拒绝原因映射为 `ApiError`

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use flux_inventory::EntityKind;
use serde::de::DeserializeOwned;
use tracing::warn;

/// JSON 请求体
///
/// - 语法错误、请求体为空、缺少 `Content-Type: application/json` → `TransportError`
/// - JSON 合法但字段缺失、类型不符或出现未知字段 → `ValidationError`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(JsonRejection::JsonDataError(e)) => Err(ApiError::ValidationError(e.body_text())),
            Err(rejection) => Err(ApiError::TransportError(rejection.body_text())),
        }
    }
}

/// 路径中的实体标识
///
/// 非整数文本 → `ValidationError`；合法整数但超出标识范围的值不可能存在，
/// 按 `NotFound` 处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::ValidationError(e.body_text()))?;

        parse_id(parts.uri.path(), &raw)
    }
}

fn parse_id(path: &str, raw: &str) -> Result<EntityId, ApiError> {
    match raw.parse::<i32>() {
        Ok(id) => Ok(EntityId(id)),
        Err(_) if is_integer(raw) => {
            let entity = path_entity(path);
            warn!(entity, id = raw, "Identifier out of range");
            Err(ApiError::NotFound(format!("{} not found: {}", entity, raw)))
        }
        Err(e) => Err(ApiError::ValidationError(format!(
            "invalid identifier in '{}': {}",
            path, e
        ))),
    }
}

fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// 路径首段对应的实体名
fn path_entity(path: &str) -> &'static str {
    match path.trim_start_matches('/').split('/').next() {
        Some("device") => EntityKind::Device.as_str(),
        Some("apiuser") => EntityKind::ApiUser.as_str(),
        Some("location") => EntityKind::Location.as_str(),
        _ => "record",
    }
}
