use crate::db::location;
use crate::{EntityKind, InventoryError, Location, LocationPatch, NewLocation, Operation, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};
use std::sync::Arc;
use tracing::{debug, info};

const ENTITY: EntityKind = EntityKind::Location;

/// 位置仓储
pub struct LocationRepository {
    db: Arc<DatabaseConnection>,
}

impl LocationRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 创建位置，返回生成的标识
    pub async fn create(&self, new: NewLocation) -> Result<i32> {
        self.insert(new)
            .await
            .map_err(|e| e.logged(ENTITY, Operation::Create, None))
    }

    /// 获取位置
    pub async fn get(&self, id: i32) -> Result<Location> {
        self.find(id)
            .await
            .map(Location::from)
            .map_err(|e| e.logged(ENTITY, Operation::Get, Some(id)))
    }

    /// 部分更新位置
    pub async fn update(&self, id: i32, patch: LocationPatch) -> Result<Location> {
        self.apply(id, patch)
            .await
            .map_err(|e| e.logged(ENTITY, Operation::Update, Some(id)))
    }

    /// 删除位置
    pub async fn delete(&self, id: i32) -> Result<()> {
        self.remove(id)
            .await
            .map_err(|e| e.logged(ENTITY, Operation::Delete, Some(id)))
    }

    async fn insert(&self, new: NewLocation) -> Result<i32> {
        new.validate()?;

        let active: location::ActiveModel = new.into();
        let id = location::Entity::insert(active)
            .exec(&*self.db)
            .await
            .map_err(|e| InventoryError::from_store(ENTITY, Operation::Create, None, e))?
            .last_insert_id;

        info!(location_id = id, "Location created");
        Ok(id)
    }

    async fn find(&self, id: i32) -> Result<location::Model> {
        let model = location::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or(InventoryError::NotFound { entity: ENTITY, id })?;

        debug!(location_id = id, "Location retrieved");
        Ok(model)
    }

    async fn apply(&self, id: i32, patch: LocationPatch) -> Result<Location> {
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

        info!(location_id = id, "Location updated");
        Ok(model.into())
    }

    async fn remove(&self, id: i32) -> Result<()> {
        let result = location::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| InventoryError::from_store(ENTITY, Operation::Delete, Some(id), e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::NotFound { entity: ENTITY, id });
        }

        info!(location_id = id, "Location deleted");
        Ok(())
    }
}
