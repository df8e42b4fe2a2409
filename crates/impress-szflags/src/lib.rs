//! impress-szflags: engine option flags, usage groups, and presets.
//!
//! Engine operations take a 64-bit option mask. Each bit is a [`SzFlag`],
//! and each operation recognizes the flags of one [`SzFlagUsageGroup`].
//! Flags outside an operation's group are ignored unless they share a bit
//! with a recognized flag.
//!
//! The flag and group catalogs refer to each other, so they are resolved by
//! a one-time [`bootstrap`] pass and frozen afterwards. Formatting turns a
//! raw mask back into names, preferring the group's own name for bits that
//! several flags share:
//!
//! ```
//! use impress_szflags::{SzFlagUsageGroup, mask};
//! assert_eq!(
//!     SzFlagUsageGroup::Search.format_mask(mask::SEARCH_INCLUDE_ALL_ENTITIES),
//!     "SZ_SEARCH_INCLUDE_RESOLVED | SZ_SEARCH_INCLUDE_POSSIBLY_SAME | \
//!      SZ_SEARCH_INCLUDE_POSSIBLY_RELATED | SZ_SEARCH_INCLUDE_NAME_ONLY [0000 0000 0000 000F]"
//! );
//! ```

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flag;
pub mod format;
pub mod group;
pub mod mask;
pub mod parse;
pub mod presets;
pub mod set;

pub use config::*;
pub use error::*;
pub use flag::*;
pub use group::*;
pub use parse::*;
pub use presets::*;
pub use set::*;

/// Combine flags into a mask.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn flags_to_mask(flags: Vec<SzFlag>) -> u64 {
    flags.into_iter().fold(0, |mask, flag| mask | flag.value())
}

/// Render a mask, naming bits the way `group` does when one is given.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn format_flags_mask(mask: u64, group: Option<SzFlagUsageGroup>) -> String {
    set::format_mask(mask, group)
}
