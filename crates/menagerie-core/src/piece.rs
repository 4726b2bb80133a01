//! A piece on the board: a side plus a capability.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece. Empty squares are represented by `None` in the grid, so
/// every `Piece` value is an occupant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    /// Create a piece from a color and a capability.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Parse a placement letter: case selects the side, the letter the capability.
    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        Some(Piece::new(Color::of_letter(c), kind))
    }

    /// Return the side this piece belongs to.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return the capability of this piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the placement letter (uppercase for White).
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({})", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn letter_roundtrip() {
        for c in "PNBRQKLZXFWHIACMOpnbrqklzxfwhiacmoEe".chars() {
            let piece = Piece::from_letter(c).unwrap();
            assert_eq!(piece.letter(), c);
        }
    }

    #[test]
    fn case_selects_color() {
        let white = Piece::from_letter('Z').unwrap();
        assert_eq!(white.color(), Color::White);
        assert_eq!(white.kind(), PieceKind::Zebra);

        let black = Piece::from_letter('i').unwrap();
        assert_eq!(black.color(), Color::Black);
        assert_eq!(black.kind(), PieceKind::Nightrider);
    }

    #[test]
    fn rejects_non_letters() {
        assert!(Piece::from_letter('3').is_none());
        assert!(Piece::from_letter('/').is_none());
    }

    #[test]
    fn display_and_debug() {
        let piece = Piece::new(Color::White, PieceKind::Amazon);
        assert_eq!(format!("{piece}"), "M");
        assert_eq!(format!("{piece:?}"), "Piece(M)");
    }
}
