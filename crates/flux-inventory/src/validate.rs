//! 字段校验规则

use crate::{InventoryError, Result};

/// 文本列最大长度（与表结构中的 `VARCHAR(255)` 一致）
pub const MAX_TEXT_LEN: usize = 255;

/// 校验必填文本字段：非空白且不超过最大长度
pub fn text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InventoryError::validation(format!("{} must not be blank", field)));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(InventoryError::validation(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(())
}

/// 校验邮箱格式：`local@domain`，域名含点且点不在首尾，不含空白
pub fn email(value: &str) -> Result<()> {
    text("email", value)?;

    let malformed = || InventoryError::validation(format!("email is malformed: {}", value));

    if value.chars().any(char::is_whitespace) {
        return Err(malformed());
    }

    let (local, domain) = value.split_once('@').ok_or_else(malformed)?;
    if local.is_empty() || domain.contains('@') {
        return Err(malformed());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(malformed());
    }

    Ok(())
}

/// 校验外键标识
pub fn reference(field: &str, id: i32) -> Result<()> {
    if id <= 0 {
        return Err(InventoryError::validation(format!(
            "{} must be a positive identifier",
            field
        )));
    }
    Ok(())
}
