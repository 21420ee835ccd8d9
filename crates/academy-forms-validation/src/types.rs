//! Validated newtypes for the checked fields
//!
//! Construction runs the same pattern as the blur check, so a value held in
//! one of these types would never leave its field marked invalid.
//!
//! # Example
//!
//! ```rust
//! use academy_forms_validation::{IndexNumber, PhoneNumber};
//!
//! let index = IndexNumber::try_new("12345678901/2024".to_string()).unwrap();
//! assert_eq!(index.year(), 2024);
//!
//! assert!(PhoneNumber::try_new("0712345678".to_string()).is_err());
//! ```

use nutype::nutype;

use crate::pattern::{is_valid_index_number, is_valid_phone};

/// `NNNNNNNNNNN/YYYY` student index number
#[nutype(
    validate(predicate = is_valid_index_number),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IndexNumber(String);

impl IndexNumber {
    /// The 11-digit serial before the `/`.
    pub fn serial(&self) -> &str {
        &self.as_str()[..11]
    }

    /// The 4-digit year suffix.
    pub fn year(&self) -> u16 {
        // pattern guarantees exactly four ASCII digits
        self.as_str()[12..]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
    }
}

/// `2547XXXXXXXX` mobile number
#[nutype(
    validate(predicate = is_valid_phone),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PhoneNumber(String);
