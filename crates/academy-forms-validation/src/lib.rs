//! Academy Forms Validation
//!
//! Format checks for the academy registration and payment forms.
//! Used natively and by the WASM crate that flags fields on blur.

pub mod config;
pub mod field;
pub mod marker;
pub mod pattern;
pub mod phone;
pub mod types;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export all validators
pub use config::*;
pub use field::*;
pub use marker::*;
pub use pattern::*;
pub use phone::*;
pub use types::*;

#[cfg(feature = "garde")]
pub use garde_validators::*;
