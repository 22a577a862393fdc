pub mod config_io;
pub mod discovery;
pub mod paths;
pub mod rc_io;
