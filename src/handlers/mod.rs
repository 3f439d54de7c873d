//! HTTP handlers

pub mod health;
pub mod explain;
pub mod contact;
pub mod content;
