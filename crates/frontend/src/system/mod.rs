pub mod auth;
pub mod profile;
