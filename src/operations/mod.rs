pub mod query;
pub mod transform;
pub mod walls;
