use crate::db::api_user;
use crate::password::hash_password_blocking;
use crate::{ApiUser, ApiUserPatch, EntityKind, InventoryError, NewApiUser, Operation, Result};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    DatabaseConnection, EntityTrait, IntoActiveModel,
};
use std::sync::Arc;
use tracing::{debug, info};

const ENTITY: EntityKind = EntityKind::ApiUser;

/// API 用户仓储
///
/// 邮箱唯一性由数据库唯一约束保证，重复写入返回 `Conflict`。
pub struct ApiUserRepository {
    db: Arc<DatabaseConnection>,
}

impl ApiUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 创建 API 用户，返回生成的标识
    pub async fn create(&self, new: NewApiUser) -> Result<i32> {
        self.insert(new)
            .await
            .map_err(|e| e.logged(ENTITY, Operation::Create, None))
    }

    /// 获取 API 用户
    pub async fn get(&self, id: i32) -> Result<ApiUser> {
        self.find(id)
            .await
            .map(ApiUser::from)
            .map_err(|e| e.logged(ENTITY, Operation::Get, Some(id)))
    }

    /// 部分更新 API 用户
    pub async fn update(&self, id: i32, patch: ApiUserPatch) -> Result<ApiUser> {
        self.apply(id, patch)
            .await
            .map_err(|e| e.logged(ENTITY, Operation::Update, Some(id)))
    }

    /// 删除 API 用户
    pub async fn delete(&self, id: i32) -> Result<()> {
        self.remove(id)
            .await
            .map_err(|e| e.logged(ENTITY, Operation::Delete, Some(id)))
    }

    async fn insert(&self, new: NewApiUser) -> Result<i32> {
        new.validate()?;

        let password_hash = hash_password_blocking(new.password).await?;
        let active = api_user::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            email: Set(new.email),
            password: Set(password_hash),
        };

        let id = api_user::Entity::insert(active)
            .exec(&*self.db)
            .await
            .map_err(|e| InventoryError::from_store(ENTITY, Operation::Create, None, e))?
            .last_insert_id;

        info!(api_user_id = id, "ApiUser created");
        Ok(id)
    }

    async fn find(&self, id: i32) -> Result<api_user::Model> {
        let model = api_user::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or(InventoryError::NotFound { entity: ENTITY, id })?;

        debug!(api_user_id = id, "ApiUser retrieved");
        Ok(model)
    }

    async fn apply(&self, id: i32, mut patch: ApiUserPatch) -> Result<ApiUser> {
        patch.validate()?;

        let model = self.find(id).await?;
        if patch.is_empty() {
            return Ok(model.into());
        }

        let password_hash = match patch.password.take() {
            Some(password) => Some(hash_password_blocking(password).await?),
            None => None,
        };

        let mut active = model.into_active_model();
        patch.apply(&mut active);
        if let Some(hash) = password_hash {
            active.password = Set(hash);
        }

        let model = active
            .update(&*self.db)
            .await
            .map_err(|e| InventoryError::from_store(ENTITY, Operation::Update, Some(id), e))?;

        info!(api_user_id = id, "ApiUser updated");
        Ok(model.into())
    }

    async fn remove(&self, id: i32) -> Result<()> {
        let result = api_user::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| InventoryError::from_store(ENTITY, Operation::Delete, Some(id), e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::NotFound { entity: ENTITY, id });
        }

        info!(api_user_id = id, "ApiUser deleted");
        Ok(())
    }
}
