use std::collections::BTreeSet;

/// gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"
pub const GEN_DELIMS: &str = ":/?#[]@";

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
pub const SUB_DELIMS: &str = "!$&'()*+,;=";

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub fn is_unreserved(c: char) -> bool {
    matches!(c,
        '-' | '.' | '_' | '~'
        | '0'..='9'
        | 'A'..='Z'
        | 'a'..='z'
    )
}

/// reserved = gen-delims / sub-delims
pub fn is_reserved(c: char) -> bool {
    GEN_DELIMS.contains(c) || SUB_DELIMS.contains(c)
}

/// The set of characters an encoder leaves as-is.
///
/// Always passed explicitly. [`CharSet::default`] is the unreserved set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    chars: BTreeSet<char>,
}

impl CharSet {
    pub fn empty() -> Self {
        Self {
            chars: BTreeSet::new(),
        }
    }

    pub fn unreserved() -> Self {
        ('A'..='Z')
            .chain('a'..='z')
            .chain('0'..='9')
            .chain("-._~".chars())
            .collect()
    }

    /// Unreserved plus `! * ' ( )`, the set JavaScript's `encodeURIComponent`
    /// leaves alone.
    pub fn component() -> Self {
        Self::unreserved().with("!*'()".chars())
    }

    /// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
    pub fn path_segment() -> Self {
        Self::unreserved().with(SUB_DELIMS.chars()).with(":@".chars())
    }

    /// path = *( pchar / "/" )
    pub fn path() -> Self {
        Self::path_segment().with(['/'])
    }

    /// query = fragment = *( pchar / "/" / "?" )
    pub fn query() -> Self {
        Self::path_segment().with("/?".chars())
    }

    pub fn with(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.chars.extend(chars);
        self
    }

    pub fn without(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        for c in chars {
            self.chars.remove(&c);
        }
        self
    }

    pub fn union(&self, other: &CharSet) -> Self {
        Self {
            chars: self.chars.union(&other.chars).copied().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Whether every unreserved character is in the set, which is what
    /// `decode(encode(s, set)) == s` relies on.
    pub fn covers_unreserved(&self) -> bool {
        Self::unreserved().chars.is_subset(&self.chars)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for CharSet {
    fn default() -> Self {
        Self::unreserved()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_set_matches_predicate() {
        let set = CharSet::unreserved();
        assert_eq!(set.len(), 26 + 26 + 10 + 4);
        for c in set.iter() {
            assert!(is_unreserved(c), "{c:?} should be unreserved");
        }
        for b in 0..=0x7Fu8 {
            let c = b as char;
            assert_eq!(set.contains(c), is_unreserved(c), "mismatch for {c:?}");
        }
        assert!(!is_unreserved('é'));
    }

    #[test]
    fn default_is_unreserved() {
        assert_eq!(CharSet::default(), CharSet::unreserved());
    }

    #[test]
    fn reserved_and_unreserved_are_disjoint() {
        for b in 0..=0x7Fu8 {
            let c = b as char;
            assert!(!(is_reserved(c) && is_unreserved(c)), "{c:?} in both");
        }
        assert!(is_reserved(':'));
        assert!(is_reserved('='));
        assert!(!is_reserved('%'));
    }

    #[test]
    fn presets_nest() {
        assert!(CharSet::component().covers_unreserved());
        assert!(CharSet::path_segment().contains('@'));
        assert!(!CharSet::path_segment().contains('/'));
        assert!(CharSet::path().contains('/'));
        assert!(CharSet::query().contains('?'));
        assert!(!CharSet::query().contains('#'));
        assert!(!CharSet::component().contains('/'));
    }

    #[test]
    fn with_without_and_union() {
        let set = CharSet::unreserved().with([' ']).without(['~']);
        assert!(set.contains(' '));
        assert!(!set.contains('~'));
        assert!(!set.covers_unreserved());

        let joined = set.union(&CharSet::empty().with(['~']));
        assert!(joined.contains('~'));
        assert!(joined.covers_unreserved());

        let mut extended = CharSet::empty();
        assert!(extended.is_empty());
        extended.extend("ab".chars());
        assert_eq!(extended.len(), 2);
    }
}
