use flux_inventory::{connect, create_schema, Inventory, NewApiUser, NewDevice, NewLocation, PoolConfig};
use std::sync::Arc;

/// 创建测试用的内存 SQLite 资产仓储
pub async fn create_test_inventory() -> Inventory {
    let db = connect(&PoolConfig::sqlite_memory())
        .await
        .expect("Failed to create test database");
    create_schema(&db).await.expect("Failed to create schema");
    Inventory::new(Arc::new(db))
}

pub fn warehouse() -> NewLocation {
    NewLocation {
        name: "Warehouse A".to_string(),
    }
}

pub fn bob() -> NewApiUser {
    NewApiUser {
        name: "Bob".to_string(),
        email: "bob@x.com".to_string(),
        password: "p".to_string(),
    }
}

pub fn sensor(location_id: i32, api_user_id: i32) -> NewDevice {
    NewDevice {
        name: "Sensor1".to_string(),
        device_type: "temp".to_string(),
        login: "a".to_string(),
        password: "b".to_string(),
        location_id,
        api_user_id,
    }
}
