use flux_inventory::{ApiUser, Device, Location};
use serde::Serialize;

/// 创建成功响应
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
}

/// 更新 / 删除成功响应
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: u16,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: 200 }
    }
}

/// 设备响应
#[derive(Debug, Serialize)]
pub struct DeviceResponse {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub login: String,
    pub password: String,
    pub location_id: i32,
    pub api_user_id: i32,
}

impl From<Device> for DeviceResponse {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            name: device.name,
            device_type: device.device_type,
            login: device.login,
            password: device.password,
            location_id: device.location_id,
            api_user_id: device.api_user_id,
        }
    }
}

/// API 用户响应（不含密码哈希）
#[derive(Debug, Serialize)]
pub struct ApiUserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<ApiUser> for ApiUserResponse {
    fn from(user: ApiUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// 位置响应
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub id: i32,
    pub name: String,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
        }
    }
}
