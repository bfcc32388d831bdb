//! Progress reporters implementing the application's notifier port

pub mod reporter;

pub use reporter::{SimpleProgress, SpinnerProgress};
