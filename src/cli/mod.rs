//! CLI command implementations

pub mod avatar;
pub mod init;
pub mod motivate;
