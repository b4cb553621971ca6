pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::build_runner;
pub use config::toml_config::CatalogConfig;
pub use crate::core::directory::{Directory, SharedDirectory};
pub use crate::core::runner::{ExampleRunner, FnExample};
pub use crate::core::{Department, DepartmentId, Employee, Example, ExampleReport};
pub use utils::error::{CatalogError, Result};
