use crate::{
    error::{error_body, InternalErrorDetail},
    handlers,
    state::AppState,
};
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::warn;

/// 创建 API 路由
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 位置
        .route("/location", post(handlers::create_location))
        .route(
            "/location/:location_id",
            get(handlers::get_location)
                .put(handlers::update_location)
                .delete(handlers::delete_location),
        )
        // API 用户
        .route("/apiuser", post(handlers::create_api_user))
        .route(
            "/apiuser/:user_id",
            get(handlers::get_api_user)
                .put(handlers::update_api_user)
                .delete(handlers::delete_api_user),
        )
        // 设备
        .route("/device", post(handlers::create_device))
        .route(
            "/device/:device_id",
            get(handlers::get_device)
                .put(handlers::update_device)
                .delete(handlers::delete_device),
        );

    if state.settings.expose_internal_errors {
        router = router.layer(map_response(reveal_internal_error));
    }

    router
        .layer(TimeoutLayer::new(state.settings.request_timeout))
        .layer(map_response(timeout_error_body))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查（同时探测数据库连接）
async fn health_check(State(state): State<AppState>) -> Response {
    match state.inventory.connection().ping().await {
        Ok(()) => "OK".into_response(),
        Err(e) => {
            warn!(error = %e, "Database ping failed");
            error_body(StatusCode::SERVICE_UNAVAILABLE, "database unavailable")
        }
    }
}

/// 为超时层产生的空 408 响应补上统一错误体
async fn timeout_error_body(method: Method, uri: Uri, response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    warn!(method = %method, path = %uri.path(), "Request timed out");
    error_body(StatusCode::REQUEST_TIMEOUT, "request timed out")
}

/// 开发模式：用内部错误详情替换 500 响应中的通用消息
async fn reveal_internal_error(mut response: Response) -> Response {
    match response.extensions_mut().remove::<InternalErrorDetail>() {
        Some(InternalErrorDetail(detail)) => error_body(response.status(), &detail),
        None => response,
    }
}
