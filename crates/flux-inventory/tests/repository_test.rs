mod common;

use common::{bob, create_test_inventory, sensor, warehouse};
use flux_inventory::password::verify_password;
use flux_inventory::{
    ApiUserPatch, DevicePatch, EntityKind, InventoryError, LocationPatch, NewApiUser,
};

fn assert_not_found(err: InventoryError, expected: EntityKind, expected_id: i32) {
    match err {
        InventoryError::NotFound { entity, id } => {
            assert_eq!(entity, expected);
            assert_eq!(id, expected_id);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// 测试设备完整生命周期
#[tokio::test]
async fn test_device_lifecycle() {
    let inventory = create_test_inventory().await;

    let location_id = inventory.locations().create(warehouse()).await.unwrap();
    let user_id = inventory.api_users().create(bob()).await.unwrap();
    assert_eq!(location_id, 1);
    assert_eq!(user_id, 1);

    // 1. 创建设备
    let input = sensor(location_id, user_id);
    let device_id = inventory.devices().create(input.clone()).await.unwrap();
    assert_eq!(device_id, 1);

    // 2. 查询设备，字段与输入完全一致
    let device = inventory.devices().get(device_id).await.unwrap();
    assert_eq!(device.id, device_id);
    assert_eq!(device.name, input.name);
    assert_eq!(device.device_type, input.device_type);
    assert_eq!(device.login, input.login);
    assert_eq!(device.password, input.password);
    assert_eq!(device.location_id, input.location_id);
    assert_eq!(device.api_user_id, input.api_user_id);

    // 3. 删除后不可再查询
    inventory.devices().delete(device_id).await.unwrap();
    let err = inventory.devices().get(device_id).await.unwrap_err();
    assert_not_found(err, EntityKind::Device, device_id);
}

#[tokio::test]
async fn test_get_missing_is_not_found_for_every_entity() {
    let inventory = create_test_inventory().await;

    assert_not_found(
        inventory.devices().get(42).await.unwrap_err(),
        EntityKind::Device,
        42,
    );
    assert_not_found(
        inventory.api_users().get(42).await.unwrap_err(),
        EntityKind::ApiUser,
        42,
    );
    assert_not_found(
        inventory.locations().get(42).await.unwrap_err(),
        EntityKind::Location,
        42,
    );
}

#[tokio::test]
async fn test_api_user_password_is_hashed() {
    let inventory = create_test_inventory().await;

    let id = inventory.api_users().create(bob()).await.unwrap();
    let user = inventory.api_users().get(id).await.unwrap();

    assert_eq!(user.name, "Bob");
    assert_eq!(user.email, "bob@x.com");
    assert_ne!(user.password_hash, "p");
    assert!(verify_password("p", &user.password_hash).unwrap());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let inventory = create_test_inventory().await;

    let first = inventory.api_users().create(bob()).await.unwrap();

    let duplicate = NewApiUser {
        name: "Robert".to_string(),
        ..bob()
    };
    let err = inventory.api_users().create(duplicate).await.unwrap_err();
    assert!(
        matches!(err, InventoryError::Conflict { entity: EntityKind::ApiUser, .. }),
        "unexpected error: {:?}",
        err
    );

    let user = inventory.api_users().get(first).await.unwrap();
    assert_eq!(user.name, "Bob");
    assert_eq!(user.email, "bob@x.com");
}

#[tokio::test]
async fn test_update_email_to_existing_conflicts() {
    let inventory = create_test_inventory().await;

    inventory.api_users().create(bob()).await.unwrap();
    let alice = inventory
        .api_users()
        .create(NewApiUser {
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            password: "q".to_string(),
        })
        .await
        .unwrap();

    let patch = ApiUserPatch {
        email: Some("bob@x.com".to_string()),
        ..Default::default()
    };
    let err = inventory.api_users().update(alice, patch).await.unwrap_err();
    assert!(matches!(err, InventoryError::Conflict { .. }));
}

#[tokio::test]
async fn test_device_with_dangling_reference_is_not_persisted() {
    let inventory = create_test_inventory().await;
    let location_id = inventory.locations().create(warehouse()).await.unwrap();
    let user_id = inventory.api_users().create(bob()).await.unwrap();

    let err = inventory
        .devices()
        .create(sensor(99, user_id))
        .await
        .unwrap_err();
    assert!(
        matches!(err, InventoryError::Reference { entity: EntityKind::Device, .. }),
        "unexpected error: {:?}",
        err
    );

    let err = inventory
        .devices()
        .create(sensor(location_id, 99))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::Reference { .. }));

    // 失败的插入没有留下任何行
    let id = inventory
        .devices()
        .create(sensor(location_id, user_id))
        .await
        .unwrap();
    assert!(inventory.devices().get(id).await.is_ok());
    for missing in 1..id {
        assert_not_found(
            inventory.devices().get(missing).await.unwrap_err(),
            EntityKind::Device,
            missing,
        );
    }
}

#[tokio::test]
async fn test_partial_update_keeps_unmentioned_fields() {
    let inventory = create_test_inventory().await;
    let location_id = inventory.locations().create(warehouse()).await.unwrap();
    let user_id = inventory.api_users().create(bob()).await.unwrap();
    let device_id = inventory
        .devices()
        .create(sensor(location_id, user_id))
        .await
        .unwrap();

    let patch = DevicePatch {
        name: Some("Sensor1-indoor".to_string()),
        password: Some("rotated".to_string()),
        ..Default::default()
    };
    let updated = inventory.devices().update(device_id, patch).await.unwrap();
    assert_eq!(updated.name, "Sensor1-indoor");

    let device = inventory.devices().get(device_id).await.unwrap();
    assert_eq!(device.name, "Sensor1-indoor");
    assert_eq!(device.password, "rotated");
    assert_eq!(device.device_type, "temp");
    assert_eq!(device.login, "a");
    assert_eq!(device.location_id, location_id);
    assert_eq!(device.api_user_id, user_id);
}

#[tokio::test]
async fn test_update_password_rehashes() {
    let inventory = create_test_inventory().await;
    let id = inventory.api_users().create(bob()).await.unwrap();

    let patch = ApiUserPatch {
        password: Some("new-secret".to_string()),
        ..Default::default()
    };
    inventory.api_users().update(id, patch).await.unwrap();

    let user = inventory.api_users().get(id).await.unwrap();
    assert_eq!(user.email, "bob@x.com");
    assert!(verify_password("new-secret", &user.password_hash).unwrap());
    assert!(!verify_password("p", &user.password_hash).unwrap());
}

#[tokio::test]
async fn test_update_device_to_missing_location_is_reference_error() {
    let inventory = create_test_inventory().await;
    let location_id = inventory.locations().create(warehouse()).await.unwrap();
    let user_id = inventory.api_users().create(bob()).await.unwrap();
    let device_id = inventory
        .devices()
        .create(sensor(location_id, user_id))
        .await
        .unwrap();

    let patch = DevicePatch {
        location_id: Some(77),
        ..Default::default()
    };
    let err = inventory.devices().update(device_id, patch).await.unwrap_err();
    assert!(matches!(err, InventoryError::Reference { .. }));

    let device = inventory.devices().get(device_id).await.unwrap();
    assert_eq!(device.location_id, location_id);
}

#[tokio::test]
async fn test_update_and_delete_missing_are_not_found() {
    let inventory = create_test_inventory().await;

    let patch = LocationPatch {
        name: Some("Nowhere".to_string()),
    };
    assert_not_found(
        inventory.locations().update(5, patch).await.unwrap_err(),
        EntityKind::Location,
        5,
    );
    assert_not_found(
        inventory.locations().update(5, LocationPatch::default()).await.unwrap_err(),
        EntityKind::Location,
        5,
    );
    assert_not_found(
        inventory.locations().delete(5).await.unwrap_err(),
        EntityKind::Location,
        5,
    );
    assert_not_found(
        inventory.api_users().delete(5).await.unwrap_err(),
        EntityKind::ApiUser,
        5,
    );
    assert_not_found(
        inventory.devices().delete(5).await.unwrap_err(),
        EntityKind::Device,
        5,
    );
}

#[tokio::test]
async fn test_empty_patch_returns_record_unchanged() {
    let inventory = create_test_inventory().await;
    let id = inventory.locations().create(warehouse()).await.unwrap();

    let location = inventory
        .locations()
        .update(id, LocationPatch::default())
        .await
        .unwrap();
    assert_eq!(location.name, "Warehouse A");
}

#[tokio::test]
async fn test_invalid_input_is_validation_error() {
    let inventory = create_test_inventory().await;

    let mut user = bob();
    user.email = "bob".to_string();
    let err = inventory.api_users().create(user).await.unwrap_err();
    assert!(matches!(err, InventoryError::ValidationError(_)));

    let mut location = warehouse();
    location.name = "  ".to_string();
    let err = inventory.locations().create(location).await.unwrap_err();
    assert!(matches!(err, InventoryError::ValidationError(_)));

    let id = inventory.locations().create(warehouse()).await.unwrap();
    let err = inventory
        .locations()
        .update(
            id,
            LocationPatch {
                name: Some(String::new()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::ValidationError(_)));
}

#[tokio::test]
async fn test_delete_referenced_location_is_rejected() {
    let inventory = create_test_inventory().await;
    let location_id = inventory.locations().create(warehouse()).await.unwrap();
    let user_id = inventory.api_users().create(bob()).await.unwrap();
    inventory
        .devices()
        .create(sensor(location_id, user_id))
        .await
        .unwrap();

    let err = inventory.locations().delete(location_id).await.unwrap_err();
    assert!(matches!(err, InventoryError::Reference { .. }));
    assert!(inventory.locations().get(location_id).await.is_ok());
}

#[tokio::test]
async fn test_identifiers_are_not_reused() {
    let inventory = create_test_inventory().await;

    let first = inventory.locations().create(warehouse()).await.unwrap();
    let second = inventory.locations().create(warehouse()).await.unwrap();
    inventory.locations().delete(second).await.unwrap();
    let third = inventory.locations().create(warehouse()).await.unwrap();

    assert!(second > first);
    assert!(third > second);
}
