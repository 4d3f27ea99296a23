// api.rs - The homoglyph engine: Homoglyphs and HomoglyphBuilder.
//
// Wraps the lookup tables with string-level operations. Every call decodes
// its input into code points, so characters outside the BMP count as one
// position.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::charclass::{CharClass, RangeSchedule};
use crate::error::{HomoglyphError, Result};
use crate::group::ConfusableGroup;
use crate::loader;
use crate::nullable::Nullable;
use crate::search;
use crate::tables::{Charset, Schedules, Tables};

/// Homoglyph-aware string comparison, search and canonicalization.
///
/// All comparisons are case-sensitive: `Ｔ` matches `T` but not `t`.
///
/// # Examples
///
/// ```
/// use homoglyph::api::Homoglyphs;
///
/// let h = Homoglyphs::embedded();
/// assert_eq!(h.to_ascii("ＴＥＳＴ"), "TEST");
/// assert!(h.equals("ｐａｙｐａｌ", "paypal"));
/// assert_eq!(h.index_of("ＨＥＬＬＯ，　ＷＯＲＬＤ！", "WORLD!"), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct Homoglyphs {
    tables: Tables,
    asymmetric: Vec<(char, char)>,
}

impl Homoglyphs {
    /// Build from `groups` with the default range schedules.
    pub fn new(groups: &[ConfusableGroup]) -> Homoglyphs {
        let tables = Tables::build(groups, &Schedules::default());
        let asymmetric = tables.asymmetric_pairs(groups);
        report_asymmetric(&asymmetric);
        Homoglyphs { tables, asymmetric }
    }

    /// Create a [`HomoglyphBuilder`] for custom schedules or strict checking.
    pub fn builder() -> HomoglyphBuilder {
        HomoglyphBuilder::new()
    }

    /// Build from the bundled group table.
    #[cfg(feature = "embedded")]
    pub fn embedded() -> Homoglyphs {
        Homoglyphs::new(&loader::embedded_groups())
    }

    /// Build from a bundled resource by name.
    pub fn from_resource(name: &str) -> Result<Homoglyphs> {
        let text = loader::resource(name)?;
        Ok(Homoglyphs::new(&loader::parse_groups(text)))
    }

    /// Build from group data read from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Homoglyphs> {
        Ok(Homoglyphs::new(&loader::read_groups(reader)?))
    }

    /// Build from the group file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Homoglyphs> {
        Ok(Homoglyphs::new(&loader::load_file(path)?))
    }

    // === Canonicalization ===

    /// Replace every code point above `U+00FF` with its extended (8-bit)
    /// representative. Code points without one are kept.
    pub fn to_ascii(&self, text: &str) -> String {
        self.canonicalize(text, CharClass::EXTENDED, Charset::Extended)
    }

    /// Replace every code point outside `a-z`, `A-Z`, `0-9` with its
    /// alphanumeric representative, falling back to the extended table.
    pub fn to_alphanumeric(&self, text: &str) -> String {
        self.canonicalize(text, CharClass::ALPHANUMERIC, Charset::Alphanumeric)
    }

    /// Replace every code point outside printable ASCII with its standard
    /// representative, falling back to the extended table.
    pub fn to_standard_charset(&self, text: &str) -> String {
        self.canonicalize(text, CharClass::STANDARD, Charset::Standard)
    }

    fn canonicalize(&self, text: &str, keep: CharClass, charset: Charset) -> String {
        text.chars()
            .map(|c| {
                if keep.matches(c) {
                    return c;
                }
                let r = self.canonical(c, charset);
                if u32::from(r) > 0xFF {
                    self.canonical(c, Charset::Extended)
                } else {
                    r
                }
            })
            .collect()
    }

    /// Representative of `c` in `charset`, or `c` itself.
    #[inline]
    pub fn canonical(&self, c: char, charset: Charset) -> char {
        self.tables.canonical(charset, c).unwrap_or(c)
    }

    // === Comparison ===

    /// `true` if both strings have the same number of code points and each
    /// pair is equal or confusable.
    pub fn equals(&self, a: &str, b: &str) -> bool {
        search::equals(&decode(a), &decode(b), self.matcher())
    }

    /// `true` if `haystack` begins with something that looks like `prefix`.
    pub fn starts_with(&self, haystack: &str, prefix: &str) -> bool {
        search::starts_with(&decode(haystack), &decode(prefix), self.matcher())
    }

    /// `true` if `haystack` ends with something that looks like `suffix`.
    pub fn ends_with(&self, haystack: &str, suffix: &str) -> bool {
        search::ends_with(&decode(haystack), &decode(suffix), self.matcher())
    }

    // === Search ===

    /// Code point index of the first occurrence of `needle`.
    pub fn index_of(&self, haystack: &str, needle: &str) -> Option<usize> {
        self.index_of_from(haystack, needle, 0).map(|i| i as usize)
    }

    /// Code point index of the first occurrence of `needle` at or after
    /// `from`.
    ///
    /// A negative `from` counts back from the last code point. An empty
    /// needle returns `Some(from)` unchanged, whatever its value.
    pub fn index_of_from(&self, haystack: &str, needle: &str, from: isize) -> Option<isize> {
        search::index_of(&decode(haystack), &decode(needle), from, self.matcher())
    }

    /// Code point index of the last occurrence of `needle`.
    pub fn last_index_of(&self, haystack: &str, needle: &str) -> Option<usize> {
        let len = haystack.chars().count() as isize;
        self.last_index_of_from(haystack, needle, len)
            .map(|i| i as usize)
    }

    /// Code point index of the last occurrence of `needle` that ends at or
    /// before `from`.
    ///
    /// A negative `from` counts back from the last code point; a `from` past
    /// the end is clamped to it. An empty needle returns the adjusted `from`.
    pub fn last_index_of_from(&self, haystack: &str, needle: &str, from: isize) -> Option<isize> {
        search::last_index_of(&decode(haystack), &decode(needle), from, self.matcher())
    }

    /// `true` if `needle` occurs anywhere in `haystack`.
    pub fn contains(&self, haystack: &str, needle: &str) -> bool {
        self.index_of(haystack, needle).is_some()
    }

    // === Introspection ===

    /// Every code point confusable with `c`, excluding `c`.
    pub fn confusables_of(&self, c: char) -> &[char] {
        self.tables.confusables(c)
    }

    /// Pairs `(a, b)` where `b` is listed as confusable with `a` but not the
    /// other way around. Empty unless groups overlap.
    pub fn asymmetric_pairs(&self) -> &[(char, char)] {
        &self.asymmetric
    }

    /// The underlying lookup tables.
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// A view of the same operations that accepts absent (`None`) input.
    pub fn nullable(&self) -> Nullable<'_> {
        Nullable::new(self)
    }

    #[inline]
    fn matcher(&self) -> impl Fn(char, char) -> bool + '_ {
        move |key, candidate| self.tables.is_match(key, candidate)
    }
}

fn decode(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn report_asymmetric(pairs: &[(char, char)]) {
    if let Some(&(a, b)) = pairs.first() {
        warn!(
            count = pairs.len(),
            first = ?(a, b),
            "confusable groups overlap; some pairs only match one way"
        );
    }
}

// === HomoglyphBuilder ===

/// Builder for a [`Homoglyphs`] engine with custom settings.
///
/// # Examples
///
/// ```
/// use homoglyph::api::Homoglyphs;
/// use homoglyph::charclass::{CharRange, RangeSchedule};
/// use homoglyph::group::ConfusableGroup;
///
/// let h = Homoglyphs::builder()
///     .group(ConfusableGroup::from("0OＯ"))
///     .alphanumeric_schedule(RangeSchedule::new([CharRange::DIGIT, CharRange::UPPER]))
///     .strict(true)
///     .build()
///     .unwrap();
/// assert_eq!(h.to_alphanumeric("Ｏ"), "0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HomoglyphBuilder {
    groups: Vec<ConfusableGroup>,
    schedules: Schedules,
    strict: bool,
}

impl HomoglyphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one group. Group order decides ties between representatives.
    pub fn group(mut self, group: ConfusableGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Append several groups in order.
    pub fn groups<I: IntoIterator<Item = ConfusableGroup>>(mut self, groups: I) -> Self {
        self.groups.extend(groups);
        self
    }

    /// Append the groups from the line format in `text`.
    pub fn parse(self, text: &str) -> Self {
        self.groups(loader::parse_groups(text))
    }

    /// Append the bundled groups.
    #[cfg(feature = "embedded")]
    pub fn embedded(self) -> Self {
        self.groups(loader::embedded_groups())
    }

    /// Range order for the alphanumeric table (default: `a-z`, `A-Z`, `0-9`).
    pub fn alphanumeric_schedule(mut self, schedule: RangeSchedule) -> Self {
        self.schedules.alphanumeric = schedule;
        self
    }

    /// Range order for the standard table.
    pub fn standard_schedule(mut self, schedule: RangeSchedule) -> Self {
        self.schedules.standard = schedule;
        self
    }

    /// Range order for the extended table.
    pub fn extended_schedule(mut self, schedule: RangeSchedule) -> Self {
        self.schedules.extended = schedule;
        self
    }

    /// Fail the build when a confusable pair only holds in one direction
    /// (default: log a warning and continue).
    pub fn strict(mut self, yes: bool) -> Self {
        self.strict = yes;
        self
    }

    /// Build the tables.
    pub fn build(self) -> Result<Homoglyphs> {
        let tables = Tables::build(&self.groups, &self.schedules);
        let asymmetric = tables.asymmetric_pairs(&self.groups);
        if let Some(&(a, b)) = asymmetric.first() {
            if self.strict {
                return Err(HomoglyphError::Asymmetric { a, b });
            }
            report_asymmetric(&asymmetric);
        }
        debug!(strict = self.strict, "homoglyph engine ready");
        Ok(Homoglyphs { tables, asymmetric })
    }
}
