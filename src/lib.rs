pub mod application;
pub mod cli;
pub mod domain;

pub use application::{AppError, EntryForm};
pub use domain::*;
