//! Board geometry configuration: pawn openers and castling rook files.

use crate::error::ConfigError;

/// Variant parameters fixed when a position is built.
///
/// Files are stored 0-indexed; [`Geometry::new`] takes them 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    pawn_home_rows: u8,
    pawn_first_move_squares: u8,
    queen_rook_file: u8,
    king_rook_file: u8,
}

impl Geometry {
    /// Standard chess: pawns on the second rank may advance two squares,
    /// rooks castle from the `a` and `h` files.
    pub const STANDARD: Geometry = Geometry {
        pawn_home_rows: 2,
        pawn_first_move_squares: 2,
        queen_rook_file: 0,
        king_rook_file: 7,
    };

    /// Build a geometry.
    ///
    /// * `pawn_home_rows`: a pawn standing within this many ranks of its own
    ///   back rank (the back rank counts as 1) may use its multi-square move.
    /// * `pawn_first_move_squares`: furthest a pawn may advance on that move.
    /// * `queen_rook_file`, `king_rook_file`: 1-indexed castling rook files.
    pub fn new(
        pawn_home_rows: u8,
        pawn_first_move_squares: u8,
        queen_rook_file: u8,
        king_rook_file: u8,
    ) -> Result<Geometry, ConfigError> {
        if queen_rook_file == 0 || king_rook_file == 0 {
            return Err(ConfigError::ZeroRookFile);
        }
        if queen_rook_file >= king_rook_file {
            return Err(ConfigError::RookFilesOrder {
                queen: queen_rook_file as usize,
                king: king_rook_file as usize,
            });
        }
        if pawn_first_move_squares == 0 {
            return Err(ConfigError::ZeroPawnSquares);
        }
        Ok(Geometry {
            pawn_home_rows,
            pawn_first_move_squares,
            queen_rook_file: queen_rook_file - 1,
            king_rook_file: king_rook_file - 1,
        })
    }

    /// How many ranks from the back a pawn may still use its multi-square move.
    #[inline]
    pub const fn pawn_home_rows(self) -> u8 {
        self.pawn_home_rows
    }

    /// Furthest a pawn may advance on its qualifying move.
    #[inline]
    pub const fn pawn_first_move_squares(self) -> u8 {
        self.pawn_first_move_squares
    }

    /// 0-indexed file of the queen-side castling rook.
    #[inline]
    pub const fn queen_rook_file(self) -> u8 {
        self.queen_rook_file
    }

    /// 0-indexed file of the king-side castling rook.
    #[inline]
    pub const fn king_rook_file(self) -> u8 {
        self.king_rook_file
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::STANDARD
    }
}
