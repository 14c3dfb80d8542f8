/*! Defines [`Ident`] and [`StaticIdent`], the names of variables, functions and predicates.

An identifier is a non-empty sequence of ASCII letters and digits, ordered as an odometer:
[`next`] increments the last character and carries to the left past `z`/`Z`/`9`, growing
the identifier when the carry passes the first character; [`prev`] decrements the last
character and borrows past `a`/`A`/`0`, shrinking the identifier when the borrow passes the
first character. Wrapping is case-insensitive and the case of every position is preserved.

[`Ident`] keeps its characters in an owned buffer that is updated in place. [`StaticIdent`]
keeps them inline and steps with `const fn`s: evaluated in a `const` item, both the
reduction and its failures happen at build time.

[`next`]: Ident::next
[`prev`]: Ident::prev
*/
use super::Error;
use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt::{self, Write},
    hash::{Hash, Hasher},
    str::FromStr,
};
use tracing::debug;

/// Is the maximum number of characters in a [`StaticIdent`].
pub const MAX_STATIC_IDENT_LEN: usize = 32;

#[inline]
const fn to_lower(c: u8) -> u8 {
    c.to_ascii_lowercase()
}

// `a`, `A` and `0` borrow from the position on their left.
#[inline]
const fn prev_wraps(c: u8) -> bool {
    to_lower(c) == b'a' || c == b'0'
}

// `z`, `Z` and `9` carry into the position on their left.
#[inline]
const fn next_wraps(c: u8) -> bool {
    to_lower(c) == b'z' || c == b'9'
}

#[inline]
const fn lowest(c: u8) -> u8 {
    if c.is_ascii_uppercase() {
        b'A'
    } else {
        b'a'
    }
}

#[inline]
const fn highest(c: u8) -> u8 {
    if c.is_ascii_uppercase() {
        b'Z'
    } else {
        b'z'
    }
}

fn validate(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::EmptyIdentifier);
    }
    if let Some(character) = name.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidCharacter {
            name: name.to_string(),
            character,
        });
    }
    Ok(())
}

/// Is an identifier whose characters live in an owned, growable buffer.
///
/// **Note**: the characters of an `Ident` are validated on construction; an `Ident` is never
/// empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ident(String);

impl Ident {
    /// Creates a new identifier from `name`, failing if `name` is empty or contains anything
    /// but ASCII letters and digits.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Returns the characters of the receiver.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the successor of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use fol_rewrite::syntax::Ident;
    /// let ident = Ident::new("xxz").unwrap();
    /// assert_eq!("xya", ident.next());
    ///
    /// let ident = Ident::new("zz").unwrap();
    /// assert_eq!("aaa", ident.next());
    /// ```
    pub fn next(mut self) -> Self {
        let mut index = self.0.len();
        while index > 0 {
            index -= 1;
            let c = self.0.as_bytes()[index];
            if !next_wraps(c) {
                self.put(index, c + 1);
                return self;
            }
            self.put(index, lowest(c));
        }

        let front = self.0.as_bytes().first().map_or(b'a', |&c| lowest(c));
        self.0.insert(0, char::from(front));
        self
    }

    /// Returns the predecessor of the receiver or [`Error::NoPredecessor`] if the receiver
    /// is one of `a`, `A` or `0`.
    ///
    /// **Example**:
    /// ```rust
    /// # use fol_rewrite::syntax::{Error, Ident};
    /// let ident = Ident::new("xa").unwrap();
    /// assert_eq!("wz", ident.prev().unwrap());
    ///
    /// let ident = Ident::new("a").unwrap();
    /// assert!(matches!(ident.prev(), Err(Error::NoPredecessor { .. })));
    /// ```
    pub fn prev(mut self) -> Result<Self, Error> {
        if self.0.len() == 1 && prev_wraps(self.0.as_bytes()[0]) {
            debug!(event = crate::trace::NO_PREDECESSOR, ident = %self);
            return Err(Error::NoPredecessor { name: self });
        }

        let mut index = self.0.len();
        while index > 0 {
            index -= 1;
            let c = self.0.as_bytes()[index];
            if !prev_wraps(c) {
                self.put(index, c - 1);
                return Ok(self);
            }
            self.put(index, highest(c));
        }

        self.0.remove(0);
        Ok(self)
    }

    // overwrites the (ASCII) character at `index`
    fn put(&mut self, index: usize, c: u8) {
        let mut buf = [0; 4];
        self.0
            .replace_range(index..=index, char::from(c).encode_utf8(&mut buf));
    }
}

impl TryFrom<char> for Ident {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl TryFrom<&str> for Ident {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Ident {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Ident {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<StaticIdent> for Ident {
    fn from(value: StaticIdent) -> Self {
        Self(value.as_bytes().iter().map(|&c| char::from(c)).collect())
    }
}

// shortlex: shorter identifiers first, then case-insensitively by character
impl Ord for Ident {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| {
                self.0
                    .bytes()
                    .map(to_lower)
                    .cmp(other.0.bytes().map(to_lower))
            })
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Ident {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<StaticIdent> for Ident {
    fn eq(&self, other: &StaticIdent) -> bool {
        self.0.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<char> for Ident {
    fn eq(&self, other: &char) -> bool {
        let mut chars = self.0.chars();
        chars.next() == Some(*other) && chars.next().is_none()
    }
}

impl PartialEq<Ident> for char {
    fn eq(&self, other: &Ident) -> bool {
        other == self
    }
}

impl PartialEq<str> for Ident {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ident {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Ident> for &str {
    fn eq(&self, other: &Ident) -> bool {
        *self == other.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Is an identifier with inline storage whose construction and stepping are `const fn`s.
///
/// Inside a `const` item, an invalid name, a successor beyond [`MAX_STATIC_IDENT_LEN`]
/// characters, or the predecessor of `a`, `A` or `0` fails the build:
/// ```compile_fail
/// # use fol_rewrite::syntax::StaticIdent;
/// const NONE: StaticIdent = StaticIdent::new("a").prev();
/// let _ = NONE;
/// ```
///
/// **Example**:
/// ```rust
/// # use fol_rewrite::syntax::{Ident, StaticIdent};
/// const Z: StaticIdent = StaticIdent::new("aa").prev();
/// assert_eq!(Z, 'z');
/// assert_eq!(Z, Ident::new("z").unwrap());
/// ```
#[derive(Clone, Copy)]
pub struct StaticIdent {
    chars: [u8; MAX_STATIC_IDENT_LEN],
    len: usize,
}

impl StaticIdent {
    /// Creates a static identifier from `name`.
    ///
    /// **Panics** (fails the build in a `const` context) if `name` is empty, longer than
    /// [`MAX_STATIC_IDENT_LEN`] or contains anything but ASCII letters and digits.
    pub const fn new(name: &str) -> Self {
        let bytes = name.as_bytes();
        if bytes.is_empty() {
            panic!("identifier must not be empty");
        }
        if bytes.len() > MAX_STATIC_IDENT_LEN {
            panic!("identifier exceeds the capacity of a static identifier");
        }

        let mut chars = [0; MAX_STATIC_IDENT_LEN];
        let mut i = 0;
        while i < bytes.len() {
            if !bytes[i].is_ascii_alphanumeric() {
                panic!("identifier must consist of ASCII letters and digits");
            }
            chars[i] = bytes[i];
            i += 1;
        }
        Self {
            chars,
            len: bytes.len(),
        }
    }

    /// Returns the number of characters in the receiver.
    #[inline(always)]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the characters of the receiver.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars[..self.len]
    }

    /// Returns the successor of the receiver.
    ///
    /// **Panics** (fails the build in a `const` context) if the successor does not fit in
    /// [`MAX_STATIC_IDENT_LEN`] characters.
    pub const fn next(self) -> Self {
        match self.checked_next() {
            Some(ident) => ident,
            None => panic!("successor exceeds the capacity of a static identifier"),
        }
    }

    /// Returns the successor of the receiver or `None` if it does not fit in
    /// [`MAX_STATIC_IDENT_LEN`] characters.
    pub const fn checked_next(self) -> Option<Self> {
        let mut chars = self.chars;
        let mut index = self.len;
        while index > 0 {
            index -= 1;
            let c = chars[index];
            if !next_wraps(c) {
                chars[index] = c + 1;
                return Some(Self {
                    chars,
                    len: self.len,
                });
            }
            chars[index] = lowest(c);
        }

        if self.len == MAX_STATIC_IDENT_LEN {
            return None;
        }
        let mut i = self.len;
        while i > 0 {
            chars[i] = chars[i - 1];
            i -= 1;
        }
        chars[0] = lowest(chars[1]);
        Some(Self {
            chars,
            len: self.len + 1,
        })
    }

    /// Returns the predecessor of the receiver.
    ///
    /// **Panics** (fails the build in a `const` context) if the receiver is `a`, `A` or `0`.
    pub const fn prev(self) -> Self {
        match self.checked_prev() {
            Some(ident) => ident,
            None => panic!("there is no identifier before \"a\", \"A\" or \"0\""),
        }
    }

    /// Returns the predecessor of the receiver or `None` if the receiver is `a`, `A` or `0`.
    pub const fn checked_prev(self) -> Option<Self> {
        if self.len == 1 && prev_wraps(self.chars[0]) {
            return None;
        }

        let mut chars = self.chars;
        let mut index = self.len;
        while index > 0 {
            index -= 1;
            let c = chars[index];
            if !prev_wraps(c) {
                chars[index] = c - 1;
                return Some(Self {
                    chars,
                    len: self.len,
                });
            }
            chars[index] = highest(c);
        }

        let mut i = 0;
        while i + 1 < self.len {
            chars[i] = chars[i + 1];
            i += 1;
        }
        chars[self.len - 1] = 0;
        Some(Self {
            chars,
            len: self.len - 1,
        })
    }
}

impl PartialEq for StaticIdent {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StaticIdent {}

impl Hash for StaticIdent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl PartialEq<Ident> for StaticIdent {
    fn eq(&self, other: &Ident) -> bool {
        other == self
    }
}

impl PartialEq<char> for StaticIdent {
    fn eq(&self, other: &char) -> bool {
        other.is_ascii() && self.as_bytes() == [*other as u8]
    }
}

impl PartialEq<StaticIdent> for char {
    fn eq(&self, other: &StaticIdent) -> bool {
        other == self
    }
}

impl PartialEq<str> for StaticIdent {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for StaticIdent {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Display for StaticIdent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_bytes()
            .iter()
            .try_for_each(|&c| f.write_char(char::from(c)))
    }
}

impl fmt::Debug for StaticIdent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
