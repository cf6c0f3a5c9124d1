use super::{api_user, device, location};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};
use tracing::info;

/// 创建表结构（幂等）
///
/// 表语句由实体定义生成，包含 `device` 到 `location` / `api_user` 的外键
/// 以及 `api_user.email` 唯一约束。父表先于子表创建。
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = vec![
        schema.create_table_from_entity(location::Entity),
        schema.create_table_from_entity(api_user::Entity),
        schema.create_table_from_entity(device::Entity),
    ];

    for stmt in statements.iter_mut() {
        stmt.if_not_exists();
        db.execute(backend.build(&*stmt)).await?;
    }

    info!(backend = ?backend, "Database schema ready");
    Ok(())
}
