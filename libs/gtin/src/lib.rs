//! # gtin
//!
//! Global Trade Item Numbers: parsing, validation, ordering, and formatting.
//!
//! ## Design Principles
//!
//! - A [`Gtin`] can only be constructed by parsing, so every value is valid
//! - The canonical form is the digit string with separators and leading
//!   zeros removed, e.g. `614141000036`
//! - All operations are pure functions with no shared state
//!
//! ## Pipeline
//!
//! ```text
//! raw text -> normalize -> length checks -> checksum -> Gtin
//! ```
//!
//! Spaces and dashes are accepted as separators anywhere in the input. Any
//! other non-digit character rejects the whole input.
//!
//! ## Example
//!
//! ```
//! use gtin::{Gtin, Layout};
//!
//! let gtin: Gtin = "0 36000 29145 2".parse().unwrap();
//! assert_eq!(gtin.as_str(), "36000291452");
//! assert_eq!(gtin.format_layout(Layout::UpcA), "0-36000-29145-2");
//! ```

mod checksum;
mod error;
mod format;
mod layout;
mod normalize;
mod value;

pub use checksum::{check_checksum, compute_check_digit};
pub use error::GtinError;
pub use format::format_digits;
pub use layout::Layout;
pub use normalize::{normalize, InvalidCharacter};
pub use value::{compare, compare_canonical, is_valid_gtin, parse, Gtin, MAX_GTIN_LEN};
