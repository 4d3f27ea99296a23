//! # Homoglyph
//!
//! Comparison, search and canonicalization of text that may contain
//! homoglyphs: characters that look like, but are not, some other character
//! (fullwidth `Ｔ` for `T`, Cyrillic `а` for Latin `a`, mathematical bold
//! `𝐀` for `A`).
//!
//! Lookalike characters are supplied as *confusable groups*. From them the
//! engine builds a homoglyph map for tolerant matching and three tables of
//! canonical representatives for normalization.
//!
//! ## Quick Start
//!
//! ```rust
//! use homoglyph::prelude::*;
//!
//! let h = Homoglyphs::embedded();
//!
//! assert!(h.equals("ＴＥＳＴ", "TEST"));
//! assert!(!h.equals("ＴＥＳＴ", "test"));
//! assert!(h.starts_with("ｈｅｌｌｏ‚ㅤｗｏｒｌｄǃ", "hello"));
//! assert_eq!(h.index_of("ＨＥＬＬＯ，　ＷＯＲＬＤ！", "WORLD!"), Some(7));
//! assert_eq!(h.to_ascii("ｔｅｓｔ"), "test");
//! ```
//!
//! Custom group data and range priorities go through [`HomoglyphBuilder`]:
//!
//! ```rust
//! use homoglyph::prelude::*;
//!
//! let h = Homoglyphs::builder()
//!     .parse("0061,0430,FF41\n0065,0435,FF45\n")
//!     .strict(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(h.to_alphanumeric("\u{0430}\u{0435}"), "ae");
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`api`] | `Homoglyphs` engine and `HomoglyphBuilder` |
//! | [`tables`] | Construction of the lookup tables |
//! | [`search`] | Tolerant comparison and single-scan substring search |
//! | [`charclass`] | 8-bit character classes and range schedules |
//! | [`group`] | Confusable group type |
//! | [`loader`] | Line-format parser and bundled data |
//! | [`nullable`] | Operations over `Option<&str>` |
//! | [`error`] | Error type |
//!
//! [`HomoglyphBuilder`]: api::HomoglyphBuilder

pub mod api;
pub mod charclass;
pub mod error;
pub mod group;
pub mod loader;
pub mod nullable;
pub mod prelude;
pub mod search;
pub mod tables;
