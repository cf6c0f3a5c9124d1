use super::{api_user, device, location};
use crate::{
    ApiUser, ApiUserPatch, Device, DevicePatch, Location, LocationPatch, NewDevice, NewLocation,
};
use sea_orm::ActiveValue::{NotSet, Set};

/// Location 模型与数据库实体的转换
impl From<location::Model> for Location {
    fn from(model: location::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<NewLocation> for location::ActiveModel {
    fn from(new: NewLocation) -> Self {
        Self {
            id: NotSet,
            name: Set(new.name),
        }
    }
}

impl LocationPatch {
    pub(crate) fn apply(self, active: &mut location::ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
    }
}

/// ApiUser 模型与数据库实体的转换
impl From<api_user::Model> for ApiUser {
    fn from(model: api_user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password,
        }
    }
}

impl ApiUserPatch {
    /// 应用名称与邮箱；密码需先哈希，由调用方单独写入
    pub(crate) fn apply(self, active: &mut api_user::ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(email) = self.email {
            active.email = Set(email);
        }
    }
}

/// Device 模型与数据库实体的转换
impl From<device::Model> for Device {
    fn from(model: device::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            device_type: model.device_type,
            login: model.login,
            password: model.password,
            location_id: model.location_id,
            api_user_id: model.api_user_id,
        }
    }
}

impl From<NewDevice> for device::ActiveModel {
    fn from(new: NewDevice) -> Self {
        Self {
            id: NotSet,
            name: Set(new.name),
            device_type: Set(new.device_type),
            login: Set(new.login),
            password: Set(new.password),
            location_id: Set(new.location_id),
            api_user_id: Set(new.api_user_id),
        }
    }
}

impl DevicePatch {
    pub(crate) fn apply(self, active: &mut device::ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(device_type) = self.device_type {
            active.device_type = Set(device_type);
        }
        if let Some(login) = self.login {
            active.login = Set(login);
        }
        if let Some(password) = self.password {
            active.password = Set(password);
        }
        if let Some(location_id) = self.location_id {
            active.location_id = Set(location_id);
        }
        if let Some(api_user_id) = self.api_user_id {
            active.api_user_id = Set(api_user_id);
        }
    }
}
