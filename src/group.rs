// group.rs - A set of mutually confusable code points.

use smallvec::SmallVec;

/// Inline capacity for group members. Most groups in practice are small.
pub(crate) const INLINE_GROUP: usize = 8;

pub(crate) type CharSet = SmallVec<[char; INLINE_GROUP]>;

/// A set of code points that all look alike.
///
/// Members are deduplicated and keep the order in which they were first
/// inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfusableGroup {
    members: CharSet,
}

impl ConfusableGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member. Returns `false` if it was already present.
    pub fn insert(&mut self, c: char) -> bool {
        if self.members.contains(&c) {
            return false;
        }
        self.members.push(c);
        true
    }

    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.members.iter().copied()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.members
    }

    /// All members except `c`.
    pub(crate) fn without(&self, c: char) -> CharSet {
        self.members.iter().copied().filter(|&m| m != c).collect()
    }
}

impl FromIterator<char> for ConfusableGroup {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut group = ConfusableGroup::new();
        for c in iter {
            group.insert(c);
        }
        group
    }
}

impl From<&str> for ConfusableGroup {
    /// Each character of `s` becomes a member.
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl<const N: usize> From<[char; N]> for ConfusableGroup {
    fn from(chars: [char; N]) -> Self {
        chars.into_iter().collect()
    }
}
