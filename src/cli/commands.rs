pub mod config;
pub mod import;
pub mod init;
pub mod log;
pub mod report;
