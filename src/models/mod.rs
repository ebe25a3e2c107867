pub mod action;
pub mod day_summary;
pub mod event;
pub mod raw_record;
pub mod session;
