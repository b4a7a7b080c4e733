pub mod admin;
pub mod arena;
pub mod upload;
