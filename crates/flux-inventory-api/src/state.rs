use flux_inventory::Inventory;
use std::sync::Arc;
use std::time::Duration;

/// API 行为配置
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// 单个请求的超时时间
    pub request_timeout: Duration,
    /// 是否在 500 响应中返回内部错误详情（仅用于开发环境）
    pub expose_internal_errors: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            expose_internal_errors: false,
        }
    }
}

/// API 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 资产仓储
    pub inventory: Arc<Inventory>,
    pub settings: ApiSettings,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(inventory: Arc<Inventory>, settings: ApiSettings) -> Self {
        Self {
            inventory,
            settings,
        }
    }
}
