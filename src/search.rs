// search.rs - Homoglyph-tolerant comparison and substring search over
// decoded code point slices.
//
// Every function takes a matcher `is_match(hay, pat)`, called with the
// haystack (or left-hand) code point first. Positions are code point
// indices.

/// Pairwise comparison of two slices of equal length.
pub fn equals<F>(a: &[char], b: &[char], is_match: F) -> bool
where
    F: Fn(char, char) -> bool,
{
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| is_match(x, y))
}

/// `true` if `prefix` matches the start of `haystack`.
pub fn starts_with<F>(haystack: &[char], prefix: &[char], is_match: F) -> bool
where
    F: Fn(char, char) -> bool,
{
    if prefix.len() > haystack.len() {
        return false;
    }
    equals(&haystack[..prefix.len()], prefix, is_match)
}

/// `true` if `suffix` matches the end of `haystack`.
pub fn ends_with<F>(haystack: &[char], suffix: &[char], is_match: F) -> bool
where
    F: Fn(char, char) -> bool,
{
    if suffix.len() > haystack.len() {
        return false;
    }
    equals(&haystack[haystack.len() - suffix.len()..], suffix, is_match)
}

/// First position at or after `from` where `needle` matches.
///
/// An empty needle returns `from` as given, without any range check. A
/// negative `from` counts back from the last index; if it is still negative
/// after that, nothing is found.
///
/// The haystack is scanned once from left to right while counting how much
/// of the needle has matched so far. On a mismatch the scan steps back by
/// that count so the next candidate start is one past the previous one,
/// which gives the same answer as trying every start in turn.
pub fn index_of<F>(haystack: &[char], needle: &[char], from: isize, is_match: F) -> Option<isize>
where
    F: Fn(char, char) -> bool,
{
    if needle.is_empty() {
        return Some(from);
    }
    if haystack.is_empty() {
        return None;
    }

    let from = resolve_negative(from, haystack.len())?;
    if needle.len() + from > haystack.len() {
        return None;
    }

    let last = needle.len() - 1;
    let mut matched = 0;
    let mut i = from;
    while i < haystack.len() {
        if is_match(haystack[i], needle[matched]) {
            if matched == last {
                return Some((i - matched) as isize);
            }
            matched += 1;
        } else {
            i -= matched;
            matched = 0;
        }
        i += 1;
    }
    None
}

/// Last position where `needle` matches and ends at or before `from`.
///
/// A negative `from` counts back from the last index; a `from` past the end
/// is clamped to the last index. An empty needle returns the adjusted
/// `from`. Mirror image of [`index_of`]: the scan runs right to left and
/// steps forward again on a mismatch.
pub fn last_index_of<F>(
    haystack: &[char],
    needle: &[char],
    from: isize,
    is_match: F,
) -> Option<isize>
where
    F: Fn(char, char) -> bool,
{
    if haystack.is_empty() {
        return None;
    }

    let from = resolve_negative(from, haystack.len())?.min(haystack.len() - 1);
    if needle.is_empty() {
        return Some(from as isize);
    }
    if needle.len() > from + 1 {
        return None;
    }

    let last = needle.len() - 1;
    let mut pos = last;
    let mut i = from as isize;
    while i >= 0 {
        if is_match(haystack[i as usize], needle[pos]) {
            if pos == 0 {
                return Some(i);
            }
            pos -= 1;
        } else {
            i += (last - pos) as isize;
            pos = last;
        }
        i -= 1;
    }
    None
}

/// Map a negative index to `len - 1 + from`. `None` if that is still
/// negative.
#[inline]
fn resolve_negative(from: isize, len: usize) -> Option<usize> {
    let from = if from < 0 {
        from + len as isize - 1
    } else {
        from
    };
    usize::try_from(from).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn exact(a: char, b: char) -> bool {
        a == b
    }

    // '0' in the haystack accepts 'o' in the pattern, not the reverse.
    fn zero_is_o(a: char, b: char) -> bool {
        a == b || (a == '0' && b == 'o')
    }

    #[test]
    fn equals_requires_same_length() {
        assert!(equals(&chars("abc"), &chars("abc"), exact));
        assert!(!equals(&chars("abc"), &chars("ab"), exact));
        assert!(equals(&[], &[], exact));
    }

    #[test]
    fn matcher_is_keyed_by_left_side() {
        assert!(equals(&chars("f00"), &chars("foo"), zero_is_o));
        assert!(!equals(&chars("foo"), &chars("f00"), zero_is_o));
    }

    #[test]
    fn prefix_and_suffix() {
        let h = chars("hello, world!");
        assert!(starts_with(&h, &chars("hello"), exact));
        assert!(!starts_with(&h, &chars("world"), exact));
        assert!(ends_with(&h, &chars("world!"), exact));
        assert!(!ends_with(&h, &chars("hello"), exact));
        assert!(starts_with(&h, &[], exact));
        assert!(!starts_with(&chars("he"), &chars("hello"), exact));
        assert!(!ends_with(&chars("d!"), &chars("world!"), exact));
    }

    #[test]
    fn index_of_basic() {
        let h = chars("hello, world!");
        assert_eq!(index_of(&h, &chars("hello"), 0, exact), Some(0));
        assert_eq!(index_of(&h, &chars("world!"), 0, exact), Some(7));
        assert_eq!(index_of(&h, &chars("me"), 0, exact), None);
        assert_eq!(index_of(&chars("abcdabcd"), &chars("abcd"), 1, exact), Some(4));
    }

    #[test]
    fn index_of_rewinds_after_partial_match() {
        // "aab" inside "aaab": the first attempt fails at the third 'a' and
        // must restart one position later, not after the consumed prefix.
        assert_eq!(index_of(&chars("aaab"), &chars("aab"), 0, exact), Some(1));
        assert_eq!(index_of(&chars("abababc"), &chars("ababc"), 0, exact), Some(2));
    }

    #[test]
    fn index_of_empty_needle_echoes_from() {
        let h = chars("test");
        assert_eq!(index_of(&h, &[], 0, exact), Some(0));
        assert_eq!(index_of(&h, &[], -7, exact), Some(-7));
        assert_eq!(index_of(&h, &[], 99, exact), Some(99));
        assert_eq!(index_of(&[], &[], 3, exact), Some(3));
    }

    #[test]
    fn index_of_negative_from() {
        let h = chars("abcdabcd");
        // -4 -> 3
        assert_eq!(index_of(&h, &chars("abcd"), -4, exact), Some(4));
        // -1 -> 6, needle no longer fits
        assert_eq!(index_of(&h, &chars("abcd"), -1, exact), None);
        // -8 -> -1
        assert_eq!(index_of(&h, &chars("a"), -8, exact), None);
    }

    #[test]
    fn index_of_needle_must_fit() {
        assert_eq!(index_of(&chars("abc"), &chars("abcd"), 0, exact), None);
        assert_eq!(index_of(&chars("abcd"), &chars("cd"), 3, exact), None);
        assert_eq!(index_of(&chars("abcd"), &chars("cd"), 2, exact), Some(2));
        assert_eq!(index_of(&[], &chars("a"), 0, exact), None);
    }

    #[test]
    fn last_index_of_basic() {
        let h = chars("abcdabcd");
        assert_eq!(last_index_of(&h, &chars("abcd"), 8, exact), Some(4));
        assert_eq!(last_index_of(&h, &chars("abcd"), 6, exact), Some(0));
        assert_eq!(last_index_of(&h, &chars("abcd"), -1, exact), Some(0));
        assert_eq!(last_index_of(&h, &chars("abcd"), 7, exact), Some(4));
        assert_eq!(last_index_of(&h, &chars("abcd"), 2, exact), None);
    }

    #[test]
    fn last_index_of_empty_needle_is_clamped() {
        let h = chars("test");
        assert_eq!(last_index_of(&h, &[], 4, exact), Some(3));
        assert_eq!(last_index_of(&h, &[], -1, exact), Some(2));
        assert_eq!(last_index_of(&h, &[], 1, exact), Some(1));
        assert_eq!(last_index_of(&h, &[], -5, exact), None);
        assert_eq!(last_index_of(&[], &[], 0, exact), None);
    }

    #[test]
    fn last_index_of_whole_haystack() {
        let h = chars("test");
        assert_eq!(last_index_of(&h, &chars("test"), 4, exact), Some(0));
        assert_eq!(last_index_of(&h, &chars("test"), 2, exact), None);
    }

    #[test]
    fn last_index_of_rewinds_after_partial_match() {
        assert_eq!(last_index_of(&chars("baaa"), &chars("baa"), 3, exact), Some(0));
        assert_eq!(last_index_of(&chars("cbababa"), &chars("cbaba"), 6, exact), Some(0));
    }

    #[test]
    fn search_uses_matcher() {
        let h = chars("b00k");
        assert_eq!(index_of(&h, &chars("ook"), 0, zero_is_o), Some(1));
        assert_eq!(last_index_of(&h, &chars("bo"), 3, zero_is_o), Some(0));
        assert_eq!(index_of(&chars("book"), &chars("00"), 0, zero_is_o), None);
    }
}
