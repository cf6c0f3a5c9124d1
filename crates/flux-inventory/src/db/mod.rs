mod converter;
mod entity;
mod schema;

pub use entity::{api_user, device, location};
pub use schema::create_schema;
