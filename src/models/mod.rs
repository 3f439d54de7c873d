//! Data models

pub mod contact;
pub mod content;

pub use contact::*;
pub use content::*;
