//! Sets of input characters carried by transitions.

use std::collections::BTreeSet;
use std::fmt::{self, Write};

use serde::{Serialize, Serializer};

/// Set of characters accepted by a transition.
///
/// ASCII members live in a 128-bit table so the common case is a single
/// bit test. Anything outside ASCII falls back to an ordered set.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SymbolSet {
    ascii: u128,
    extended: BTreeSet<char>,
}

impl SymbolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set containing exactly `c`.
    pub fn single(c: char) -> Self {
        let mut set = Self::new();
        set.insert(c);
        set
    }

    /// ASCII letters and digits: the members of the `.` wildcard.
    pub fn alphanumeric() -> Self {
        ('0'..='9').chain('A'..='Z').chain('a'..='z').collect()
    }

    /// Add `c`, returning `true` if it was not already present.
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_ascii() {
            let bit = 1u128 << (c as u32);
            let fresh = self.ascii & bit == 0;
            self.ascii |= bit;
            fresh
        } else {
            self.extended.insert(c)
        }
    }

    /// Add every member of `other`.
    pub fn union_with(&mut self, other: &SymbolSet) {
        self.ascii |= other.ascii;
        self.extended.extend(other.extended.iter().copied());
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1u128 << (c as u32)) != 0
        } else {
            self.extended.contains(&c)
        }
    }

    pub fn len(&self) -> usize {
        self.ascii.count_ones() as usize + self.extended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.extended.is_empty()
    }

    /// Members in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..128)
            .filter(move |&b| self.ascii & (1u128 << b) != 0)
            .map(char::from)
            .chain(self.extended.iter().copied())
    }
}

impl FromIterator<char> for SymbolSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<char> for SymbolSet {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        for c in iter {
            self.insert(c);
        }
    }
}

/// Renders `'a'` for a single member, otherwise a bracket list where runs of
/// three or more consecutive code points collapse into `x-y`.
impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<char> = self.iter().collect();
        if let [only] = members.as_slice() {
            return write!(f, "'{}'", only.escape_debug());
        }

        f.write_char('[')?;
        let mut i = 0;
        while i < members.len() {
            let mut j = i;
            while j + 1 < members.len() && members[j + 1] as u32 == members[j] as u32 + 1 {
                j += 1;
            }
            if j - i >= 2 {
                write!(
                    f,
                    "{}-{}",
                    members[i].escape_debug(),
                    members[j].escape_debug()
                )?;
            } else {
                for c in &members[i..=j] {
                    write!(f, "{}", c.escape_debug())?;
                }
            }
            i = j + 1;
        }
        f.write_char(']')
    }
}

impl fmt::Debug for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolSet({self})")
    }
}

/// Serialized as the string of its members, in order.
impl Serialize for SymbolSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let members: String = self.iter().collect();
        serializer.serialize_str(&members)
    }
}
