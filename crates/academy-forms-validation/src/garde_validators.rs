//! Custom garde validators for the academy field formats
//!
//! Lets structs deriving `garde::Validate` reuse the blur-check patterns.
//!
//! # Example
//!
//! ```ignore
//! use garde::Validate;
//!
//! #[derive(Validate)]
//! struct Registration {
//!     #[garde(custom(index_number))]
//!     index_number: String,
//!     #[garde(custom(phone_number))]
//!     phone: String,
//! }
//! ```

use crate::pattern::{is_valid_index_number, is_valid_phone};

/// Validator: 11 digits, `/`, 4-digit year
pub fn index_number(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if !is_valid_index_number(value) {
        return Err(garde::Error::new(
            "index number must be 11 digits, '/', then a 4-digit year",
        ));
    }

    Ok(())
}

/// Validator: `2547` followed by 8 digits
pub fn phone_number(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if !is_valid_phone(value) {
        return Err(garde::Error::new(
            "phone number must be 12 digits starting with 2547",
        ));
    }

    Ok(())
}
