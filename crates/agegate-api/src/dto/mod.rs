//! Data transfer objects for the AgeGate API

pub mod consent;
pub mod content;
pub mod gate;

pub use consent::*;
pub use content::*;
pub use gate::*;
