use crate::db::device;
use crate::{Device, DevicePatch, EntityKind, InventoryError, NewDevice, Operation, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};
use std::sync::Arc;
use tracing::{debug, info};

const ENTITY: EntityKind = EntityKind::Device;

/// 设备仓储
///
/// 设备对位置和 API 用户的引用完整性由数据库外键保证，
/// 引用不存在时返回 `Reference`，且不会写入任何行。
pub struct DeviceRepository {
    db: Arc<DatabaseConnection>,
}

impl DeviceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 创建设备，返回生成的标识
    pub async fn create(&self, new: NewDevice) -> Result<i32> {
        self.insert(new)
            .await
            .map_err(|e| e.logged(ENTITY, Operation::Create, None))
    }

    /// 获取设备
    pub async fn get(&self, id: i32) -> Result<Device> {
        self.find(id)
            .await
            .map(Device::from)
            .map_err(|e| e.logged(ENTITY, Operation::Get, Some(id)))
    }

    /// 部分更新设备
    pub async fn update(&self, id: i32, patch: DevicePatch) -> Result<Device> {
        self.apply(id, patch)
            .await
            .map_err(|e| e.logged(ENTITY, Operation::Update, Some(id)))
    }

    /// 删除设备
    pub async fn delete(&self, id: i32) -> Result<()> {
        self.remove(id)
            .await
            .map_err(|e| e.logged(ENTITY, Operation::Delete, Some(id)))
    }

    async fn insert(&self, new: NewDevice) -> Result<i32> {
        new.validate()?;

        let location_id = new.location_id;
        let api_user_id = new.api_user_id;
        let active: device::ActiveModel = new.into();
        let id = device::Entity::insert(active)
            .exec(&*self.db)
            .await
            .map_err(|e| InventoryError::from_store(ENTITY, Operation::Create, None, e))?
            .last_insert_id;

        info!(device_id = id, location_id, api_user_id, "Device created");
        Ok(id)
    }

    async fn find(&self, id: i32) -> Result<device::Model> {
        let model = device::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or(InventoryError::NotFound { entity: ENTITY, id })?;

        debug!(device_id = id, "Device retrieved");
        Ok(model)
    }

    async fn apply(&self, id: i32, patch: DevicePatch) -> Result<Device> {
        patch.validate()?;

        let model = self.find(id).await?;
        if patch.is_empty() {
            return Ok(model.into());
        }

        let mut active = model.into_active_model();
        patch.apply(&mut active);
        let model = active
            .update(&*self.db)
            .await
            .map_err(|e| InventoryError::from_store(ENTITY, Operation::Update, Some(id), e))?;

        info!(device_id = id, "Device updated");
        Ok(model.into())
    }

    async fn remove(&self, id: i32) -> Result<()> {
        let result = device::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| InventoryError::from_store(ENTITY, Operation::Delete, Some(id), e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::NotFound { entity: ENTITY, id });
        }

        info!(device_id = id, "Device deleted");
        Ok(())
    }
}
