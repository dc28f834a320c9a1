pub mod ml;
pub mod submission;
