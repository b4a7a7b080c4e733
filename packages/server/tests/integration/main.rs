
mod admin;
mod arena;
mod meta;
