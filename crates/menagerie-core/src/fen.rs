//! FEN-style notation: decoding into and encoding from [`Position`].
//!
//! The placement field generalizes FEN to any rectangular board: the width is
//! taken from the first rank, empty-square runs may span several digits, and
//! every ASCII letter is a piece (see [`PieceKind`](crate::PieceKind)).

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::geometry::Geometry;
use crate::piece::Piece;
use crate::position::{EnPassant, Position};
use crate::square::Square;

/// The notation for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Decode a position, using `geometry` for pawn openers and castling.
    ///
    /// # Errors
    ///
    /// Returns a [`FenError`] describing the first malformed field.
    pub fn from_fen(fen: &str, geometry: Geometry) -> Result<Position, FenError> {
        decode(fen, geometry).inspect_err(|err| debug!(%err, fen, "rejected position notation"))
    }
}

fn decode(fen: &str, geometry: Geometry) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    // Parse piece placement, top rank first.
    let ranks: Vec<&str> = fields[0].split('/').collect();
    let height = ranks.len();
    if height > u8::MAX as usize {
        return Err(FenError::TooTall { height });
    }

    let rows = ranks
        .iter()
        .map(|rank| parse_rank(rank))
        .collect::<Result<Vec<_>, _>>()?;

    let width = rows[0].len();
    if width == 0 {
        return Err(FenError::EmptyBoard);
    }
    for (rank_index, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(FenError::NonRectangular {
                rank_index,
                length: row.len(),
                width,
            });
        }
    }

    if geometry.king_rook_file() as usize >= width {
        return Err(FenError::RookFileOffBoard {
            file: geometry.king_rook_file() as usize + 1,
            width,
        });
    }

    let cells: Vec<Option<Piece>> = rows.into_iter().rev().flatten().collect();

    // Locate both kings.
    let mut kings = [Square::new(0, 0); Color::COUNT];
    let mut king_counts = [0usize; Color::COUNT];
    for (index, cell) in cells.iter().enumerate() {
        if let Some(piece) = cell
            && piece.kind().is_royal()
        {
            let color = piece.color().index();
            kings[color] = Square::new((index % width) as u8, (index / width) as u8);
            king_counts[color] += 1;
        }
    }
    for color in Color::ALL {
        let count = king_counts[color.index()];
        if count != 1 {
            let color_name = match color {
                Color::White => "white",
                Color::Black => "black",
            };
            return Err(FenError::KingCount {
                color: color_name,
                count,
            });
        }
    }

    // Parse active color
    let side_to_move = Color::from_fen(fields[1]).ok_or_else(|| FenError::InvalidColor {
        found: fields[1].to_string(),
    })?;

    // Parse castling rights
    let castling = CastleRights::from_fen(fields[2])?;

    // Parse en passant, stored as a one-square range.
    let en_passant = if fields[3] == "-" {
        None
    } else {
        let sq = Square::from_algebraic(fields[3])
            .filter(|sq| (sq.file() as usize) < width && (sq.rank() as usize) < height)
            .ok_or_else(|| FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            })?;
        Some(EnPassant::new(sq.file(), sq.rank(), sq.rank()))
    };

    let halfmove_clock = fields[4]
        .parse::<u32>()
        .map_err(|_| FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: fields[4].to_string(),
        })?;

    let fullmove_number = fields[5]
        .parse::<u32>()
        .map_err(|_| FenError::InvalidMoveCounter {
            field: "fullmove number",
            found: fields[5].to_string(),
        })?;

    Ok(Position::from_raw(
        cells,
        width as u8,
        height as u8,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
        kings,
        geometry,
    ))
}

/// Expand one rank of the placement field into square contents.
fn parse_rank(rank: &str) -> Result<Vec<Option<Piece>>, FenError> {
    let mut row = Vec::new();
    let mut run = 0usize;

    for c in rank.chars() {
        if let Some(digit) = c.to_digit(10) {
            run = run * 10 + digit as usize;
            if run > Square::MAX_FILES {
                return Err(FenError::TooWide { width: run });
            }
        } else {
            let piece = Piece::from_letter(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            row.resize(row.len() + run, None);
            run = 0;
            row.push(Some(piece));
        }
    }
    row.resize(row.len() + run, None);

    if row.len() > Square::MAX_FILES {
        return Err(FenError::TooWide { width: row.len() });
    }
    Ok(row)
}

impl FromStr for Position {
    type Err = FenError;

    /// Decode with the standard [`Geometry`].
    fn from_str(fen: &str) -> Result<Position, FenError> {
        Position::from_fen(fen, Geometry::STANDARD)
    }
}

/// Encodes the notation. The en passant field names only the low end of the
/// stored range, so a range wider than one square does not survive a round
/// trip through text.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Piece placement
        for rank in (0..self.height()).rev() {
            let mut empty_count = 0u32;

            for file in 0..self.width() {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {}", self.side_to_move())?;
        write!(f, " {}", self.castling())?;

        match self.en_passant() {
            Some(range) => write!(f, " {}", range.square())?,
            None => write!(f, " -")?,
        }

        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::color::Color;
    use crate::error::FenError;
    use crate::geometry::Geometry;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::{EnPassant, Position};
    use crate::square::Square;

    fn roundtrip(fen: &str) {
        let position: Position = fen.parse().unwrap();
        let output = format!("{position}");
        assert_eq!(output, fen, "FEN roundtrip failed");
        let again: Position = output.parse().unwrap();
        assert_eq!(position, again);
    }

    #[test]
    fn roundtrip_standard_positions() {
        roundtrip(STARTING_FEN);
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    }

    #[test]
    fn roundtrip_fairy_board() {
        let fen = "rnaibkqicnzr/pppppppppppp/12/12/12/o10O/12/12/PPPPPPPPPPPP/RNAIBKQICNZR w KQkq - 0 1";
        roundtrip(fen);
        let position: Position = fen.parse().unwrap();
        assert_eq!(position.width(), 12);
        assert_eq!(position.height(), 10);
        assert_eq!(
            position.piece_at(Square::new(11, 4)),
            Some(Piece::new(Color::White, PieceKind::Obstacle))
        );
        assert_eq!(position.king_square(Color::White), Square::new(5, 0));
        assert_eq!(position.king_square(Color::Black), Square::new(5, 9));
    }

    #[test]
    fn multi_digit_runs_and_ranks() {
        let fen = "k15/16/16/16/16/16/16/16/16/16/16/15K w - b11 3 40";
        let position: Position = fen.parse().unwrap();
        assert_eq!(position.width(), 16);
        assert_eq!(position.height(), 12);
        assert_eq!(position.en_passant(), Some(EnPassant::new(1, 10, 10)));
        assert_eq!(format!("{position}"), fen);
    }

    #[test]
    fn wildcard_letters_survive() {
        roundtrip("4k3/8/8/3E4/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn decode_detects_check() {
        let position: Position = "4k3/8/8/8/8/8/8/4K2r w - - 0 1".parse().unwrap();
        assert!(position.in_check());
    }

    #[test]
    fn custom_geometry_is_kept() {
        let geometry = Geometry::new(3, 3, 1, 10).unwrap();
        let position =
            Position::from_fen("k9/10/10/10/10/10/10/10/10/9K w - - 0 1", geometry).unwrap();
        assert_eq!(position.geometry(), geometry);
    }

    #[test]
    fn error_wrong_field_count() {
        assert_eq!(
            "e4 e5".parse::<Position>().unwrap_err(),
            FenError::WrongFieldCount { found: 2 }
        );
    }

    #[test]
    fn error_non_rectangular() {
        let err = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse::<Position>()
            .unwrap_err();
        assert_eq!(
            err,
            FenError::NonRectangular {
                rank_index: 1,
                length: 7,
                width: 8
            }
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPP*PPP/RNBQKBNR w KQkq - 0 1".parse::<Position>();
        assert_eq!(result.unwrap_err(), FenError::InvalidPieceChar { character: '*' });
    }

    #[test]
    fn error_king_count() {
        let result = "8/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Position>();
        assert_eq!(
            result.unwrap_err(),
            FenError::KingCount {
                color: "black",
                count: 0
            }
        );
        let result = "k6k/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Position>();
        assert!(matches!(result, Err(FenError::KingCount { count: 2, .. })));
    }

    #[test]
    fn error_too_wide() {
        let result = "k26/27/27/26K w - - 0 1".parse::<Position>();
        assert!(matches!(result, Err(FenError::TooWide { .. })));
    }

    #[test]
    fn error_rook_file_off_board() {
        let result = "k5/6/6/5K w - - 0 1".parse::<Position>();
        assert_eq!(
            result.unwrap_err(),
            FenError::RookFileOffBoard { file: 8, width: 6 }
        );
    }

    #[test]
    fn error_invalid_color() {
        let result = "4k3/8/8/8/8/8/8/4K3 x - - 0 1".parse::<Position>();
        assert!(matches!(result, Err(FenError::InvalidColor { .. })));
    }

    #[test]
    fn error_invalid_castling() {
        let result = "4k3/8/8/8/8/8/8/4K3 w XQkq - 0 1".parse::<Position>();
        assert_eq!(
            result.unwrap_err(),
            FenError::InvalidCastlingChar { character: 'X' }
        );
    }

    #[test]
    fn error_invalid_en_passant() {
        assert!("4k3/8/8/8/8/8/8/4K3 w - z9 0 1".parse::<Position>().is_err());
        assert!("4k3/8/8/8/8/8/8/4K3 w - e9 0 1".parse::<Position>().is_err());
    }

    #[test]
    fn error_invalid_move_counter() {
        let result = "4k3/8/8/8/8/8/8/4K3 w - - abc 1".parse::<Position>();
        assert!(matches!(
            result,
            Err(FenError::InvalidMoveCounter {
                field: "halfmove clock",
                ..
            })
        ));
        assert!("4k3/8/8/8/8/8/8/4K3 w - - 0 -1".parse::<Position>().is_err());
    }
}
