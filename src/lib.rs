pub mod app;
pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod seed;

pub use app::build_app;
