pub mod day_summary;
pub mod entry;
pub mod session;
pub mod status;
