pub mod build;
pub mod persist;
