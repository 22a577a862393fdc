pub mod coefficient;
pub mod config;

pub use coefficient::*;
pub use config::*;
