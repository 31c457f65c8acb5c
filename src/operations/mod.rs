//! Operations module
//!
//! Coordinates folder duplication including naming, copying, and opening the result

pub mod copy;
pub mod duplicate;
pub mod open;
pub mod service;

pub use copy::*;
pub use duplicate::*;
pub use open::*;
pub use service::*;
