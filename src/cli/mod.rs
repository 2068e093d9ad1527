pub mod app;
pub mod render;
pub mod shell;

pub use app::{Cli, Commands, DumpFormat, LogLevel, DEFAULT_CATALOG};
pub use shell::Shell;
