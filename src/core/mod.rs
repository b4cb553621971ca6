pub mod directory;
pub mod runner;

pub use crate::domain::model::{Department, DepartmentId, Employee, ExampleReport};
pub use crate::domain::ports::{ConfigProvider, Example};
pub use crate::utils::error::Result;
