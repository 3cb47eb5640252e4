//! API request handlers

pub mod consent;
pub mod content;
pub mod gate;
pub mod health;
