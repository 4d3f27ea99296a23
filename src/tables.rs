// tables.rs - Confusable lookup tables.
//
// One shared homoglyph map (char -> every other member of its group) and
// three canonicalization maps (char -> representative), each filled by
// walking the groups once per range of its schedule.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::charclass::RangeSchedule;
use crate::group::{CharSet, ConfusableGroup};

pub(crate) type HomoglyphMap = HashMap<char, CharSet>;
pub(crate) type CanonicalMap = HashMap<char, char>;

/// Target character set of a canonicalization table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// `a-z`, `A-Z`, `0-9`
    Alphanumeric,
    /// Printable ASCII, `U+0020..=U+007E`
    Standard,
    /// `U+0000..=U+00FF`
    Extended,
}

/// The three range schedules used to build the canonicalization tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedules {
    pub alphanumeric: RangeSchedule,
    pub standard: RangeSchedule,
    pub extended: RangeSchedule,
}

impl Default for Schedules {
    fn default() -> Self {
        Schedules {
            alphanumeric: RangeSchedule::alphanumeric(),
            standard: RangeSchedule::standard(),
            extended: RangeSchedule::extended(),
        }
    }
}

/// Immutable lookup tables derived from a list of confusable groups.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    homoglyphs: HomoglyphMap,
    alphanumeric: CanonicalMap,
    standard: CanonicalMap,
    extended: CanonicalMap,
}

impl Tables {
    /// Build all four tables.
    ///
    /// The canonicalization tables are filled in the order alphanumeric,
    /// standard, extended. The homoglyph map is shared between the three
    /// passes and every entry in it is written once, by the first pass that
    /// visits its key.
    pub fn build(groups: &[ConfusableGroup], schedules: &Schedules) -> Tables {
        let mut tables = Tables::default();
        populate(
            groups,
            &schedules.alphanumeric,
            &mut tables.homoglyphs,
            &mut tables.alphanumeric,
        );
        populate(
            groups,
            &schedules.standard,
            &mut tables.homoglyphs,
            &mut tables.standard,
        );
        populate(
            groups,
            &schedules.extended,
            &mut tables.homoglyphs,
            &mut tables.extended,
        );
        debug!(
            groups = groups.len(),
            homoglyphs = tables.homoglyphs.len(),
            alphanumeric = tables.alphanumeric.len(),
            standard = tables.standard.len(),
            extended = tables.extended.len(),
            "built confusable tables"
        );
        tables
    }

    /// Every code point confusable with `c`, excluding `c` itself.
    pub fn confusables(&self, c: char) -> &[char] {
        self.homoglyphs
            .get(&c)
            .map(|set| set.as_slice())
            .unwrap_or(&[])
    }

    /// `true` if `candidate` equals `key` or is listed as confusable with it.
    ///
    /// The lookup is keyed by `key` only.
    #[inline]
    pub fn is_match(&self, key: char, candidate: char) -> bool {
        key == candidate
            || self
                .homoglyphs
                .get(&key)
                .is_some_and(|set| set.contains(&candidate))
    }

    /// Representative of `c` in the given charset, if one was chosen.
    #[inline]
    pub fn canonical(&self, charset: Charset, c: char) -> Option<char> {
        self.map(charset).get(&c).copied()
    }

    fn map(&self, charset: Charset) -> &CanonicalMap {
        match charset {
            Charset::Alphanumeric => &self.alphanumeric,
            Charset::Standard => &self.standard,
            Charset::Extended => &self.extended,
        }
    }

    /// Number of keys in the homoglyph map.
    pub fn len(&self) -> usize {
        self.homoglyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.homoglyphs.is_empty()
    }

    /// Number of entries in a canonicalization table.
    pub fn canonical_len(&self, charset: Charset) -> usize {
        self.map(charset).len()
    }

    /// Pairs `(a, b)` where `b` is confusable with `a` but `a` is not
    /// confusable with `b`, in group order.
    ///
    /// A code point that belongs to more than one group only keeps the
    /// members of the first group that mentions it, so overlapping groups
    /// produce one-way entries.
    pub fn asymmetric_pairs(&self, groups: &[ConfusableGroup]) -> Vec<(char, char)> {
        let mut seen = HashSet::new();
        let mut pairs = Vec::new();
        for group in groups {
            for a in group.iter() {
                if !seen.insert(a) {
                    continue;
                }
                for &b in self.confusables(a) {
                    if !self.confusables(b).contains(&a) {
                        pairs.push((a, b));
                    }
                }
            }
        }
        pairs
    }
}

/// Fill `map` from `groups`, one walk per range of `schedule`.
///
/// For every member `c` of a group: the homoglyph entry for `c` is written if
/// missing, and if `c` lies in the current range and has no entry of its own
/// in `map`, `c` becomes the representative of every other member. That last
/// step overwrites representatives chosen earlier for those members.
fn populate(
    groups: &[ConfusableGroup],
    schedule: &RangeSchedule,
    homoglyphs: &mut HomoglyphMap,
    map: &mut CanonicalMap,
) {
    for range in schedule.ranges() {
        for group in groups {
            for c in group.iter() {
                let has_homoglyphs = homoglyphs.contains_key(&c);
                let has_canonical = map.contains_key(&c);
                if has_homoglyphs && has_canonical {
                    continue;
                }

                let rest = group.without(c);
                if !range.contains(c) || has_canonical {
                    if !has_homoglyphs {
                        homoglyphs.insert(c, rest);
                    }
                    continue;
                }

                for &u in &rest {
                    if let Some(prev) = map.insert(u, c) {
                        if prev != c {
                            trace!(?u, ?prev, representative = ?c, "relabel");
                        }
                    }
                }
                if !has_homoglyphs {
                    homoglyphs.insert(c, rest);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charclass::CharRange;

    fn groups(specs: &[&str]) -> Vec<ConfusableGroup> {
        specs.iter().map(|s| ConfusableGroup::from(*s)).collect()
    }

    #[test]
    fn empty_groups_build_empty_tables() {
        let t = Tables::build(&[], &Schedules::default());
        assert!(t.is_empty());
        assert_eq!(t.canonical_len(Charset::Alphanumeric), 0);
        assert_eq!(t.canonical_len(Charset::Standard), 0);
        assert_eq!(t.canonical_len(Charset::Extended), 0);
    }

    #[test]
    fn homoglyph_entries_exclude_self() {
        let t = Tables::build(&groups(&["aа"]), &Schedules::default());
        assert_eq!(t.confusables('a'), &['а']);
        assert_eq!(t.confusables('а'), &['a']);
        assert!(t.is_match('a', 'a'));
        assert!(t.is_match('а', 'a'));
        assert!(!t.is_match('a', 'b'));
    }

    #[test]
    fn representative_in_range_wins() {
        let t = Tables::build(&groups(&["ａaа"]), &Schedules::default());
        assert_eq!(t.canonical(Charset::Alphanumeric, 'ａ'), Some('a'));
        assert_eq!(t.canonical(Charset::Alphanumeric, 'а'), Some('a'));
        assert_eq!(t.canonical(Charset::Alphanumeric, 'a'), None);
    }

    #[test]
    fn lowercase_pass_beats_uppercase() {
        // 'l' and 'I' in one group: 'l' settles first, which gives 'I' an
        // entry of its own, so the uppercase pass leaves the group alone.
        let t = Tables::build(&groups(&["Il|"]), &Schedules::default());
        assert_eq!(t.canonical(Charset::Alphanumeric, 'I'), Some('l'));
        assert_eq!(t.canonical(Charset::Alphanumeric, '|'), Some('l'));
        assert_eq!(t.canonical(Charset::Alphanumeric, 'l'), None);
    }

    #[test]
    fn punctuation_pass_precedes_letters_in_standard() {
        let t = Tables::build(&groups(&["l|"]), &Schedules::default());
        assert_eq!(t.canonical(Charset::Alphanumeric, '|'), Some('l'));
        assert_eq!(t.canonical(Charset::Standard, 'l'), Some('|'));
        assert_eq!(t.canonical(Charset::Standard, '|'), None);
    }

    #[test]
    fn high_range_precedes_printable_in_extended() {
        let t = Tables::build(&groups(&["x×"]), &Schedules::default());
        assert_eq!(t.canonical(Charset::Extended, 'x'), Some('×'));
        assert_eq!(t.canonical(Charset::Standard, '×'), Some('x'));
    }

    #[test]
    fn later_group_relabels_shared_member() {
        // 'q' sits in both groups. 'a' claims it first; 'b' still has an open
        // slot when its group is reached and overwrites the value for 'q'.
        let schedules = Schedules {
            alphanumeric: RangeSchedule::new([CharRange::LOWER]),
            ..Schedules::default()
        };
        let t = Tables::build(&groups(&["aq", "bq"]), &schedules);
        assert_eq!(t.canonical(Charset::Alphanumeric, 'q'), Some('b'));
        // The homoglyph entry for 'q' comes from its first group only.
        assert_eq!(t.confusables('q'), &['a']);
        assert_eq!(t.asymmetric_pairs(&groups(&["aq", "bq"])), vec![('b', 'q')]);
    }

    #[test]
    fn settled_key_blocks_later_passes() {
        // In the lowercase pass 'a' becomes the representative of 'B', giving
        // 'B' its own entry; the uppercase pass then cannot promote 'B'.
        let schedules = Schedules {
            alphanumeric: RangeSchedule::new([CharRange::LOWER, CharRange::UPPER]),
            ..Schedules::default()
        };
        let t = Tables::build(&groups(&["aB", "B7"]), &schedules);
        assert_eq!(t.canonical(Charset::Alphanumeric, 'B'), Some('a'));
        assert_eq!(t.canonical(Charset::Alphanumeric, '7'), None);
    }

    #[test]
    fn empty_schedules_leave_homoglyphs_empty() {
        let schedules = Schedules {
            alphanumeric: RangeSchedule::new(Vec::<CharRange>::new()),
            standard: RangeSchedule::new(Vec::<CharRange>::new()),
            extended: RangeSchedule::new(Vec::<CharRange>::new()),
        };
        let t = Tables::build(&groups(&["aа"]), &schedules);
        assert!(t.is_empty());
    }

    #[test]
    fn disjoint_groups_are_symmetric() {
        let gs = groups(&["aаａ", "bｂ", "0０"]);
        let t = Tables::build(&gs, &Schedules::default());
        assert!(t.asymmetric_pairs(&gs).is_empty());
    }
}
