//! 仓储操作：每类实体一组 create / get / update / delete
//!
//! 约定（三类实体一致）：
//! - update 只修改补丁中出现的字段；空补丁仅校验记录存在
//! - update / delete 的标识不存在时返回 `NotFound`

mod api_user;
mod device;
mod location;

pub use api_user::ApiUserRepository;
pub use device::DeviceRepository;
pub use location::LocationRepository;
