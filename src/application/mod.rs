//! # Application Layer
//!
//! The analysis port and the use case coordinating domain and connector layers.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
