//! Move representation: a start and a destination square.

use std::fmt;

use crate::square::Square;

/// A move from one square to another.
///
/// Castling is a king move of two files, en passant a pawn's diagonal step
/// onto an empty square. Promotion is chosen separately once the pawn
/// has arrived, so no move carries a promotion piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Return the start square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Return the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::square::Square;

    #[test]
    fn accessors() {
        let mv = Move::new(Square::new(4, 1), Square::new(4, 3));
        assert_eq!(mv.from(), Square::new(4, 1));
        assert_eq!(mv.to(), Square::new(4, 3));
    }

    #[test]
    fn display_concatenates_squares() {
        let mv = Move::new(Square::new(0, 8), Square::new(0, 9));
        assert_eq!(format!("{mv}"), "a9a10");
        assert_eq!(format!("{mv:?}"), "Move(a9a10)");
    }
}
