//! Board coordinates.

use std::fmt;

/// A coordinate on a board of arbitrary size.
///
/// Files count from the left (file 0 is `a`), ranks from White's home rank
/// (rank 0 is `1`). Whether the square lies on a given board is decided by
/// the [`Position`](crate::Position) holding it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Highest number of files the algebraic form can express.
    pub const MAX_FILES: usize = 26;

    /// Create a square from a zero-based file and rank.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Square {
        Square { file, rank }
    }

    /// Return the zero-based file (column).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Return the zero-based rank (row).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Return the square displaced by `(df, dr)`, or `None` if a coordinate
    /// would leave the `u8` range. Board bounds are not checked here.
    #[inline]
    pub fn offset(self, df: i16, dr: i16) -> Option<Square> {
        let file = u8::try_from(self.file as i16 + df).ok()?;
        let rank = u8::try_from(self.rank as i16 + dr).ok()?;
        Some(Square { file, rank })
    }

    /// Parity of `file + rank`, which tells the two square colors apart.
    #[inline]
    pub const fn parity(self) -> usize {
        (self.file as usize + self.rank as usize) % 2
    }

    /// Parse an algebraic coordinate such as `e4` or `c10`.
    ///
    /// The file is a single lowercase letter; the rank is 1-indexed and may
    /// span several digits.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        if !file_char.is_ascii_lowercase() {
            return None;
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let rank: u16 = digits.parse().ok()?;
        if rank == 0 {
            return None;
        }
        let rank = u8::try_from(rank - 1).ok()?;
        Some(Square::new(file_char as u8 - b'a', rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file) as char;
        write!(f, "{file}{}", self.rank as u16 + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
