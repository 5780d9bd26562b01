pub mod joke;
pub mod quiz;
