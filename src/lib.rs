pub mod app;
pub mod components;
pub mod constants;
pub mod join;
pub mod loader;
pub mod metrics;
pub mod pages;
pub mod summary;
pub mod theme;
pub mod types;
