pub mod db_utils;
pub mod initialize;
pub mod log;
pub mod pool;
pub mod raw;
