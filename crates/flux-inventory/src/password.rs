//! API 用户密码哈希（Argon2，PHC 字符串格式）

use crate::{InventoryError, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// 计算密码哈希，每次调用使用新的随机盐
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InventoryError::internal(format!("password hashing failed: {}", e)))
}

/// 校验明文密码与已存储的哈希是否匹配
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| InventoryError::internal(format!("stored password hash is invalid: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// 在阻塞线程池中计算哈希，避免占用异步工作线程
pub(crate) async fn hash_password_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| InventoryError::internal(format!("password hashing task failed: {}", e)))?
}
