pub mod context;
pub mod scene;
pub mod time;
