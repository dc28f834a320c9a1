pub mod catalog;
pub mod columns;
pub mod errors;
pub mod request;
