pub mod picking;
pub mod speed;
