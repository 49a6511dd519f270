//! Rule-based normalization of free-text US mailing-address strings.
//!
//! Rewrites one address at a time into a canonical token form: directionals
//! abbreviated and upper-cased, unit designators standardized, street-suffix
//! words expanded or abbreviated by position, and stray artifacts (corrupted
//! newlines, hash-marks, broken fraction notation, punctuation) cleaned up.
//! Intended as a preprocessing step before address matching, deduplication,
//! or geocoding. It does not validate deliverability or parse addresses into
//! structured fields.
//!
//! ```
//! use addr_normalize::normalize_address;
//!
//! assert_eq!(normalize_address("456 Oak Ave #5"), "456 Oak Ave Unit 5");
//! assert_eq!(normalize_address("123 Canyon Lake Circle"), "123 Canyon Lake Cir");
//! ```

pub mod case;
pub mod normalizer;
pub mod tables;

pub use normalizer::{AddressNormalizer, normalize_address};
pub use tables::LookupTables;
