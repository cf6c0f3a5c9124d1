use flux_inventory::PoolConfig;
use flux_inventory_server::{AppConfig, Server};
use serde_json::{json, Value};

#[tokio::test]
async fn test_server_serves_requests_and_shuts_down() {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.database = PoolConfig::sqlite_memory();

    let server = Server::bind(&config).await.unwrap();
    let addr = server.local_addr().unwrap();

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let handle = tokio::spawn(server.run(async {
        let _ = rx.await;
    }));

    let base = format!("http://{}", addr);
    let client = reqwest::Client::new();

    let health = client.get(format!("{}/health", base)).send().await.unwrap();
    assert_eq!(health.status(), 200);

    let response = client
        .post(format!("{}/location", base))
        .json(&json!({"name": "Warehouse A"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"id": 1}));

    let response = client
        .put(format!("{}/location/1", base))
        .json(&json!({"name": "Warehouse B"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = client
        .get(format!("{}/location/1", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"id": 1, "name": "Warehouse B"}));

    let response = client.get(format!("{}/location/2", base)).send().await.unwrap();
    assert_eq!(response.status(), 404);

    drop(client);
    tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
