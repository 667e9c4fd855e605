//! Input handling module

pub mod glob_resolver;
pub mod menu_reader;

pub use glob_resolver::resolve_patterns;
pub use menu_reader::MenuReader;
