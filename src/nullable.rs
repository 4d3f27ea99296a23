// nullable.rs - Homoglyph operations over optional input.
//
// For callers whose strings may be absent (e.g. unset form fields). A
// `None` never matches anything, except that two `None`s are equal.

use crate::api::Homoglyphs;
use crate::error::{HomoglyphError, Result};

/// Borrowed view of a [`Homoglyphs`] engine taking `Option<&str>` arguments.
///
/// ```
/// use homoglyph::api::Homoglyphs;
///
/// let h = Homoglyphs::embedded();
/// let n = h.nullable();
/// assert!(n.equals(None, None));
/// assert!(!n.equals(None, Some("")));
/// assert_eq!(n.index_of(Some("test"), None), None);
/// assert!(n.to_ascii(None).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Nullable<'h> {
    inner: &'h Homoglyphs,
}

impl<'h> Nullable<'h> {
    pub fn new(inner: &'h Homoglyphs) -> Self {
        Nullable { inner }
    }

    pub fn to_ascii(&self, text: Option<&str>) -> Result<String> {
        Ok(self.inner.to_ascii(required(text)?))
    }

    pub fn to_alphanumeric(&self, text: Option<&str>) -> Result<String> {
        Ok(self.inner.to_alphanumeric(required(text)?))
    }

    pub fn to_standard_charset(&self, text: Option<&str>) -> Result<String> {
        Ok(self.inner.to_standard_charset(required(text)?))
    }

    pub fn equals(&self, a: Option<&str>, b: Option<&str>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.inner.equals(a, b),
            _ => false,
        }
    }

    pub fn starts_with(&self, haystack: Option<&str>, prefix: Option<&str>) -> bool {
        haystack.zip(prefix).is_some_and(|(h, p)| self.inner.starts_with(h, p))
    }

    pub fn ends_with(&self, haystack: Option<&str>, suffix: Option<&str>) -> bool {
        haystack.zip(suffix).is_some_and(|(h, s)| self.inner.ends_with(h, s))
    }

    pub fn index_of(&self, haystack: Option<&str>, needle: Option<&str>) -> Option<usize> {
        haystack.zip(needle).and_then(|(h, n)| self.inner.index_of(h, n))
    }

    pub fn index_of_from(
        &self,
        haystack: Option<&str>,
        needle: Option<&str>,
        from: isize,
    ) -> Option<isize> {
        haystack.zip(needle).and_then(|(h, n)| self.inner.index_of_from(h, n, from))
    }

    pub fn last_index_of(&self, haystack: Option<&str>, needle: Option<&str>) -> Option<usize> {
        haystack.zip(needle).and_then(|(h, n)| self.inner.last_index_of(h, n))
    }

    pub fn last_index_of_from(
        &self,
        haystack: Option<&str>,
        needle: Option<&str>,
        from: isize,
    ) -> Option<isize> {
        haystack.zip(needle).and_then(|(h, n)| self.inner.last_index_of_from(h, n, from))
    }

    pub fn contains(&self, haystack: Option<&str>, needle: Option<&str>) -> bool {
        self.index_of(haystack, needle).is_some()
    }
}

fn required(text: Option<&str>) -> Result<&str> {
    text.ok_or(HomoglyphError::InvalidArgument("text cannot be None"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::ConfusableGroup;

    fn engine() -> Homoglyphs {
        Homoglyphs::new(&[ConfusableGroup::from("aａ")])
    }

    #[test]
    fn none_text_is_invalid_argument() {
        let h = engine();
        let n = h.nullable();
        for result in [
            n.to_ascii(None),
            n.to_alphanumeric(None),
            n.to_standard_charset(None),
        ] {
            assert!(matches!(result, Err(HomoglyphError::InvalidArgument(_))));
        }
        assert_eq!(n.to_ascii(Some("")).unwrap(), "");
        assert_eq!(n.to_alphanumeric(Some("ａ")).unwrap(), "a");
    }

    #[test]
    fn none_never_matches() {
        let h = engine();
        let n = h.nullable();
        assert!(n.equals(None, None));
        assert!(!n.equals(Some("a"), None));
        assert!(!n.equals(None, Some("a")));
        assert!(n.equals(Some("ａ"), Some("a")));

        assert!(!n.starts_with(None, None));
        assert!(!n.starts_with(Some("a"), None));
        assert!(!n.ends_with(None, Some("")));
        assert!(n.ends_with(Some("ａ"), Some("a")));

        assert_eq!(n.index_of(None, Some("a")), None);
        assert_eq!(n.index_of_from(Some("a"), None, 0), None);
        assert_eq!(n.last_index_of(None, None), None);
        assert_eq!(n.last_index_of_from(None, Some(""), 0), None);
        assert!(!n.contains(None, Some("")));
        assert!(n.contains(Some("xａ"), Some("a")));
    }
}
