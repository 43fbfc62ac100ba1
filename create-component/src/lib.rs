pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod generator;
pub mod locator;
pub mod name;
pub mod probe;
pub mod templates;

pub use config::ScaffoldConfig;
pub use error::{Result, Rollback, ScaffoldError};
pub use name::{ComponentName, StyleToken};
