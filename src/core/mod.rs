pub mod clock;
pub mod duration;
pub mod summary;
pub mod tracker;
