//! Castling rights: four independent flags that can only ever be cleared.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the king-rook file.
    KingSide,
    /// Toward the queen-rook file.
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];
}

/// Castling rights packed as bits: 0 = `K`, 1 = `Q`, 2 = `k`, 3 = `q`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

/// FEN letters in bit order.
const LETTERS: [char; 4] = ['K', 'Q', 'k', 'q'];

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All four castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        let offset = match side {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        };
        1 << (color.index() * 2 + offset)
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    /// Return these rights with one flag added.
    #[inline]
    pub const fn with(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 | Self::bit(color, side))
    }

    /// Clear one flag.
    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit(color, side);
    }

    /// Clear both flags of `color`.
    #[inline]
    pub fn revoke_color(&mut self, color: Color) {
        for side in CastleSide::ALL {
            self.revoke(color, side);
        }
    }

    /// Parse the FEN castling field: `-` or a subset of `KQkq`.
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::KingSide),
                'Q' => (Color::White, CastleSide::QueenSide),
                'k' => (Color::Black, CastleSide::KingSide),
                'q' => (Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            rights = rights.with(color, side);
        }
        Ok(rights)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (index, letter) in LETTERS.iter().enumerate() {
            if self.0 & (1 << index) != 0 {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::color::Color;

    #[test]
    fn from_fen_is_order_insensitive() {
        let rights = CastleRights::from_fen("qK").unwrap();
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
        assert_eq!(format!("{rights}"), "Kq");
    }

    #[test]
    fn from_fen_all_and_none() {
        assert_eq!(CastleRights::from_fen("KQkq").unwrap(), CastleRights::ALL);
        let none = CastleRights::from_fen("-").unwrap();
        assert!(none.is_empty());
        assert_eq!(format!("{none}"), "-");
    }

    #[test]
    fn from_fen_invalid() {
        assert!(CastleRights::from_fen("KQxq").is_err());
        assert!(CastleRights::from_fen("1").is_err());
    }

    #[test]
    fn revoke_clears_only_the_named_flag() {
        let mut rights = CastleRights::ALL;
        rights.revoke(Color::Black, CastleSide::KingSide);
        assert_eq!(format!("{rights}"), "KQq");
        rights.revoke_color(Color::White);
        assert_eq!(format!("{rights}"), "q");
    }

    #[test]
    fn with_adds_a_flag() {
        let rights = CastleRights::NONE.with(Color::White, CastleSide::QueenSide);
        assert_eq!(format!("{rights:?}"), "CastleRights(Q)");
    }
}
