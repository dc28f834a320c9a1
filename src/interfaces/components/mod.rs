pub mod banner;
pub mod charts;
