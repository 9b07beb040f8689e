//! Utility Modules

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
