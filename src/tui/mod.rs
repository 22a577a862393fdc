pub mod app;
pub mod input;
pub mod render;
pub mod terminal;
pub mod theme;

pub use app::{SessionOutcome, run_session};
