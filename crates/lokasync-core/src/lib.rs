pub mod config;
pub mod logging;

pub mod drive;
pub mod payload;
pub mod session;
pub mod validate;
