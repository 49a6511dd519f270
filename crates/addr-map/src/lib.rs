//! Address-column identification for tabular CRM exports.
//!
//! CRM and fundraising exports name their address columns inconsistently:
//! some use a fixed vocabulary (`AddrLine1`, `Address1`, `PRIMARY_ADDRESS`),
//! others stamp out templated families (`CnAdrAll_1_03_Addrline1`). This
//! crate classifies header names against both an exact alias table and a set
//! of per-field regex patterns, and reports which columns carry address
//! lines worth normalizing.

pub mod patterns;

pub use patterns::{AddressField, ColumnMatch, address_line_columns, classify_columns};
