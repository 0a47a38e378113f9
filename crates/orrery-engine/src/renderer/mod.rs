pub mod camera;
pub mod controls;
pub mod instance;
pub mod primitives;
