use crate::config::AppConfig;
use anyhow::Result;
use axum::Router;
use flux_inventory::{connect, create_schema, DatabaseConnection, Inventory};
use flux_inventory_api::{create_router, AppState};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// HTTP 服务
///
/// 启动时建立连接池并确保表结构存在；关闭时先停止接收请求，再关闭连接池。
pub struct Server {
    listener: TcpListener,
    router: Router,
    db: Arc<DatabaseConnection>,
}

impl Server {
    /// 初始化连接池、表结构与路由，并绑定监听地址
    pub async fn bind(config: &AppConfig) -> Result<Self> {
        let db = Arc::new(connect(&config.database).await?);
        create_schema(&db).await?;

        let inventory = Arc::new(Inventory::new(db.clone()));
        let state = AppState::new(inventory, config.api_settings());
        let router = create_router(state);

        let listener = TcpListener::bind(config.bind_addr()).await?;

        Ok(Self {
            listener,
            router,
            db,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// 运行直到 `shutdown` 完成
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(addr = %self.local_addr()?, "Listening");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped, closing database pool");
        match Arc::try_unwrap(self.db) {
            Ok(db) => db.close().await?,
            Err(_) => warn!("Database pool still shared at shutdown, connections close on drop"),
        }

        Ok(())
    }
}
