use sea_orm::{DbErr, SqlErr};
use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

/// 实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Device,
    ApiUser,
    Location,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Device => "device",
            EntityKind::ApiUser => "api_user",
            EntityKind::Location => "location",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 仓储操作类型（用于日志上下文）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 资产仓储错误类型
#[derive(Error, Debug)]
pub enum InventoryError {
    /// 输入缺失或格式错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 标识符不存在
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: i32 },

    /// 唯一约束冲突
    #[error("{entity} conflicts with an existing record")]
    Conflict { entity: EntityKind, detail: String },

    /// 外键约束失败
    #[error("{entity} {reason}")]
    Reference {
        entity: EntityKind,
        reason: &'static str,
        detail: String,
    },

    /// 数据库错误（基础设施故障）
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// 资产仓储结果类型
pub type Result<T> = std::result::Result<T, InventoryError>;

impl InventoryError {
    /// 创建验证错误
    pub fn validation(msg: impl Into<String>) -> Self {
        InventoryError::ValidationError(msg.into())
    }

    /// 创建内部错误
    pub fn internal(msg: impl Into<String>) -> Self {
        InventoryError::InternalError(msg.into())
    }

    /// 按约束类型对写操作的数据库错误分类
    ///
    /// `id` 为被写入的行标识；行在读取后被并发删除时 sea-orm 返回
    /// `RecordNotUpdated`，此时归类为 `NotFound`。
    pub fn from_store(entity: EntityKind, op: Operation, id: Option<i32>, err: DbErr) -> Self {
        if let (DbErr::RecordNotUpdated, Some(id)) = (&err, id) {
            return InventoryError::NotFound { entity, id };
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                InventoryError::Conflict { entity, detail }
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                let reason = match op {
                    Operation::Delete => "is still referenced by other records",
                    _ => "references a location or api user that does not exist",
                };
                InventoryError::Reference {
                    entity,
                    reason,
                    detail,
                }
            }
            _ => InventoryError::DatabaseError(err),
        }
    }

    /// 是否为调用方错误（非基础设施故障）
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            InventoryError::DatabaseError(_) | InventoryError::InternalError(_)
        )
    }

    /// 记录失败日志并原样返回错误
    pub fn logged(self, entity: EntityKind, op: Operation, id: Option<i32>) -> Self {
        if self.is_client_error() {
            warn!(
                entity = %entity,
                operation = %op,
                id = ?id,
                error = ?self,
                "Inventory operation rejected"
            );
        } else {
            error!(
                entity = %entity,
                operation = %op,
                id = ?id,
                error = ?self,
                "Inventory operation failed"
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_updated_maps_to_not_found() {
        let err = InventoryError::from_store(
            EntityKind::Device,
            Operation::Update,
            Some(7),
            DbErr::RecordNotUpdated,
        );
        assert!(matches!(
            err,
            InventoryError::NotFound {
                entity: EntityKind::Device,
                id: 7
            }
        ));
    }

    #[test]
    fn test_unclassified_store_error_is_fatal() {
        let err = InventoryError::from_store(
            EntityKind::Location,
            Operation::Create,
            None,
            DbErr::Custom("connection reset".to_string()),
        );
        assert!(matches!(err, InventoryError::DatabaseError(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_not_found_message() {
        let err = InventoryError::NotFound {
            entity: EntityKind::ApiUser,
            id: 3,
        };
        assert_eq!(err.to_string(), "api_user not found: 3");
        assert!(err.is_client_error());
    }
}
