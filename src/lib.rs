pub mod catalog;
pub mod cli;
pub mod error;
pub mod registry;

pub use error::{HoenndexError, Result};
