//! # OxiUtil Core
//!
//! Core components shared by the OxiUtil crates:
//!
//! - [`error`]: The [`FormatError`] type reported for malformed encoded text
//! - [`traits`]: The [`TextEncoding`] trait implemented by each alphabet
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI: oxiutil encode / decode / escape / sort            │
//! ├────────────────────────────┬────────────────────────────┤
//! │ oxiutil-ascii85            │ oxiutil-sort               │
//! │   Ascii85, header escaping │   lazy stable ordering     │
//! ├────────────────────────────┴────────────────────────────┤
//! │ oxiutil-core (this crate): FormatError, TextEncoding    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiutil_core::{FormatError, Result};
//!
//! fn first_digit(text: &str) -> Result<u32> {
//!     let ch = text.chars().next().ok_or(FormatError::TruncatedGroup)?;
//!     ch.to_digit(10).ok_or(FormatError::invalid_character(ch, 0))
//! }
//!
//! assert_eq!(first_digit("7"), Ok(7));
//! assert!(first_digit("x").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-exports for convenience
pub use error::{FormatError, Result};
pub use traits::TextEncoding;
