//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod ai;
pub mod budget;
pub mod dashboard;
pub mod expenses;
pub mod reports;

// Re-export all handlers for use in router
pub use ai::*;
pub use budget::*;
pub use dashboard::*;
pub use expenses::*;
pub use reports::*;
