use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flux_inventory::InventoryError;
use serde_json::json;
use std::fmt;

/// 生产模式下 500 响应的统一消息
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 字段缺失或格式错误
    ValidationError(String),
    /// 请求体不是合法 JSON 或缺失
    TransportError(String),
    /// 资源未找到
    NotFound(String),
    /// 唯一约束冲突
    Conflict(String),
    /// 外键引用失败
    ReferenceError(String),
    /// 内部错误
    InternalError(String),
}

/// 内部错误详情，挂在响应扩展上，由 `expose_internal_errors` 中间件决定是否返回给客户端
#[derive(Debug, Clone)]
pub struct InternalErrorDetail(pub String);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::TransportError(msg) => write!(f, "Malformed request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::Conflict(msg) => write!(f, "{}", msg),
            ApiError::ReferenceError(msg) => write!(f, "{}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) | ApiError::TransportError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::ReferenceError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 统一错误响应体：`{"error": ..., "status": ...}`
pub fn error_body(status: StatusCode, message: &str) -> Response {
    let body = Json(json!({
        "error": message,
        "status": status.as_u16(),
    }));

    (status, body).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ApiError::InternalError(detail) = self {
            let mut response = error_body(status, INTERNAL_ERROR_MESSAGE);
            response.extensions_mut().insert(InternalErrorDetail(detail));
            return response;
        }

        error_body(status, &self.to_string())
    }
}

// 从 flux_inventory::InventoryError 转换
impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            InventoryError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            InventoryError::Conflict { .. } => ApiError::Conflict(err.to_string()),
            InventoryError::Reference { .. } => ApiError::ReferenceError(err.to_string()),
            InventoryError::DatabaseError(_) | InventoryError::InternalError(_) => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
