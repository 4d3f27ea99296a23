// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use homoglyph::prelude::*;
//!
//! let h = Homoglyphs::new(&[ConfusableGroup::from("aａ")]);
//! assert!(h.contains("bａd", "bad"));
//! ```

pub use crate::api::{HomoglyphBuilder, Homoglyphs};
pub use crate::charclass::{CharClass, CharRange, RangeSchedule};
pub use crate::error::HomoglyphError;
pub use crate::group::ConfusableGroup;
pub use crate::nullable::Nullable;
pub use crate::tables::Charset;
