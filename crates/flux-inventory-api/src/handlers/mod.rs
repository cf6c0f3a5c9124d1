pub mod api_user;
pub mod device;
pub mod location;

pub use api_user::*;
pub use device::*;
pub use location::*;
