pub mod coordinates;
pub mod distance;
