//! Data models

pub mod dashboard;
pub mod planet;
pub mod prediction;

pub use dashboard::*;
pub use planet::*;
pub use prediction::*;
