pub mod catalog;
pub mod filters;
