pub mod cache;
pub mod error;
pub mod form;
pub mod list;
