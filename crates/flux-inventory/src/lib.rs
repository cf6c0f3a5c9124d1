pub mod db;
pub mod error;
pub mod inventory;
pub mod model;
pub mod password;
pub mod pool;
pub mod repository;
pub mod validate;

pub use db::{api_user, create_schema, device, location};
pub use error::{EntityKind, InventoryError, Operation, Result};
pub use inventory::Inventory;
pub use model::{
    ApiUser, ApiUserPatch, Device, DevicePatch, Location, LocationPatch, NewApiUser, NewDevice,
    NewLocation,
};
pub use pool::{connect, PoolConfig};
pub use repository::{ApiUserRepository, DeviceRepository, LocationRepository};
pub use sea_orm::DatabaseConnection;
