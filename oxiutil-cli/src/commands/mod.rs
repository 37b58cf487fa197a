//! Command implementations for OxiUtil CLI.

pub mod codec;
pub mod escape;
pub mod sort;

pub use codec::{CodecOptions, cmd_decode, cmd_encode};
pub use escape::{cmd_escape, cmd_unescape};
pub use sort::{KeySpec, SortOptions, cmd_sort};
