pub mod geometry;
pub mod lighting;
pub mod render;
