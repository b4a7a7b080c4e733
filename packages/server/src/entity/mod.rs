pub mod arena_config;
