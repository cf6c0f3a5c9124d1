use crate::{ApiUserRepository, DeviceRepository, LocationRepository};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 资产仓储集合
///
/// 三个仓储共享同一个连接池句柄；池本身是唯一的跨请求共享资源。
pub struct Inventory {
    db: Arc<DatabaseConnection>,
    devices: DeviceRepository,
    api_users: ApiUserRepository,
    locations: LocationRepository,
}

impl Inventory {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            devices: DeviceRepository::new(db.clone()),
            api_users: ApiUserRepository::new(db.clone()),
            locations: LocationRepository::new(db.clone()),
            db,
        }
    }

    pub fn devices(&self) -> &DeviceRepository {
        &self.devices
    }

    pub fn api_users(&self) -> &ApiUserRepository {
        &self.api_users
    }

    pub fn locations(&self) -> &LocationRepository {
        &self.locations
    }

    /// 底层连接池句柄
    pub fn connection(&self) -> &Arc<DatabaseConnection> {
        &self.db
    }
}
