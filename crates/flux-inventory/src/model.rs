use crate::{validate, Result};
use serde::Deserialize;

/// 位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: i32,
    pub name: String,
}

/// API 用户
///
/// 密码只以 Argon2 哈希形式保存，不会对外返回。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// 设备
///
/// `login` / `password` 是登录设备本身所需的凭据，按原样保存和返回。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: i32,
    pub name: String,
    pub device_type: String,
    pub login: String,
    pub password: String,
    pub location_id: i32,
    pub api_user_id: i32,
}

/// 创建位置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewLocation {
    pub name: String,
}

impl NewLocation {
    pub fn validate(&self) -> Result<()> {
        validate::text("name", &self.name)
    }
}

/// 位置部分更新
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationPatch {
    pub name: Option<String>,
}

impl LocationPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate::text("name", name)?;
        }
        Ok(())
    }
}

/// 创建 API 用户
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewApiUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewApiUser {
    pub fn validate(&self) -> Result<()> {
        validate::text("name", &self.name)?;
        validate::email(&self.email)?;
        validate::text("password", &self.password)
    }
}

/// API 用户部分更新
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiUserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl ApiUserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate::text("name", name)?;
        }
        if let Some(email) = &self.email {
            validate::email(email)?;
        }
        if let Some(password) = &self.password {
            validate::text("password", password)?;
        }
        Ok(())
    }
}

/// 创建设备
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewDevice {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub login: String,
    pub password: String,
    pub location_id: i32,
    pub api_user_id: i32,
}

impl NewDevice {
    pub fn validate(&self) -> Result<()> {
        validate::text("name", &self.name)?;
        validate::text("type", &self.device_type)?;
        validate::text("login", &self.login)?;
        validate::text("password", &self.password)?;
        validate::reference("location_id", self.location_id)?;
        validate::reference("api_user_id", self.api_user_id)
    }
}

/// 设备部分更新
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevicePatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub location_id: Option<i32>,
    pub api_user_id: Option<i32>,
}

impl DevicePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.device_type.is_none()
            && self.login.is_none()
            && self.password.is_none()
            && self.location_id.is_none()
            && self.api_user_id.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate::text("name", name)?;
        }
        if let Some(device_type) = &self.device_type {
            validate::text("type", device_type)?;
        }
        if let Some(login) = &self.login {
            validate::text("login", login)?;
        }
        if let Some(password) = &self.password {
            validate::text("password", password)?;
        }
        if let Some(location_id) = self.location_id {
            validate::reference("location_id", location_id)?;
        }
        if let Some(api_user_id) = self.api_user_id {
            validate::reference("api_user_id", api_user_id)?;
        }
        Ok(())
    }
}
