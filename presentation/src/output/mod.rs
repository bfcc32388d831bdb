//! Console output rendering

pub mod console;

pub use console::Console;
