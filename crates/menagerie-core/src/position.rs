//! The position: board grid, side to move, castling, en passant, counters and
//! the state flags derived from them.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::geometry::Geometry;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Squares on which a just-advanced pawn may be captured in passing.
///
/// A pawn that advances `n` squares can be taken on any of the `n - 1`
/// squares it skipped, so this is an inclusive rank range on one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassant {
    file: u8,
    low: u8,
    high: u8,
}

impl EnPassant {
    /// Create a range. `low` and `high` are swapped if given out of order.
    #[inline]
    pub fn new(file: u8, low: u8, high: u8) -> EnPassant {
        EnPassant {
            file,
            low: low.min(high),
            high: low.max(high),
        }
    }

    /// The capturable file.
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Lowest capturable rank.
    #[inline]
    pub const fn low(self) -> u8 {
        self.low
    }

    /// Highest capturable rank.
    #[inline]
    pub const fn high(self) -> u8 {
        self.high
    }

    /// Return `true` if a pawn landing on `sq` captures in passing.
    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        sq.file() == self.file && (self.low..=self.high).contains(&sq.rank())
    }

    /// The single square written to notation: the low end of the range.
    #[inline]
    pub const fn square(self) -> Square {
        Square::new(self.file, self.low)
    }
}

/// A complete variant-chess position.
///
/// Board dimensions and [`Geometry`] are fixed for the lifetime of the value.
/// Exactly one king per side exists and its square is cached.
#[derive(Clone)]
pub struct Position {
    /// Row-major grid: index = rank * width + file. `None` is an empty square.
    cells: Vec<Option<Piece>>,
    width: u8,
    height: u8,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<EnPassant>,
    /// Half-moves since the last capture or pawn move.
    halfmove_clock: u32,
    /// Starts at 1, incremented once Black has moved.
    fullmove_number: u32,
    in_check: bool,
    game_over: bool,
    pending_promotion: Option<Square>,
    /// King squares indexed by [`Color::index()`].
    kings: [Square; Color::COUNT],
    geometry: Geometry,
}

impl Position {
    /// Return the standard 8x8 starting position.
    pub fn starting_position() -> Position {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut cells = vec![None; 64];
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            cells[file] = Some(Piece::new(Color::White, kind));
            cells[8 + file] = Some(Piece::new(Color::White, PieceKind::Pawn));
            cells[48 + file] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            cells[56 + file] = Some(Piece::new(Color::Black, kind));
        }

        Position {
            cells,
            width: 8,
            height: 8,
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            in_check: false,
            game_over: false,
            pending_promotion: None,
            kings: [Square::new(4, 0), Square::new(4, 7)],
            geometry: Geometry::STANDARD,
        }
    }

    /// Construct a position from decoded components. Used by notation decoding.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_raw(
        cells: Vec<Option<Piece>>,
        width: u8,
        height: u8,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<EnPassant>,
        halfmove_clock: u32,
        fullmove_number: u32,
        kings: [Square; Color::COUNT],
        geometry: Geometry,
    ) -> Position {
        let mut position = Position {
            cells,
            width,
            height,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            in_check: false,
            game_over: false,
            pending_promotion: None,
            kings,
            geometry,
        };
        position.refresh_check();
        position
    }

    /// Number of files.
    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of ranks.
    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Return `true` if `sq` lies on this board.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.file() < self.width && sq.rank() < self.height
    }

    #[inline]
    fn index(&self, sq: Square) -> usize {
        sq.rank() as usize * self.width as usize + sq.file() as usize
    }

    /// Return the piece on `sq`, or `None` for an empty or off-board square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if self.contains(sq) {
            self.cells[self.index(sq)]
        } else {
            None
        }
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Overwrite the content of an on-board square.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, content: Option<Piece>) {
        debug_assert!(self.contains(sq), "{sq} is off the board");
        let index = self.index(sq);
        self.cells[index] = content;
    }

    /// Return the on-board square displaced from `sq` by `(df, dr)`.
    #[inline]
    pub(crate) fn step(&self, sq: Square, df: i16, dr: i16) -> Option<Square> {
        sq.offset(df, dr).filter(|&target| self.contains(target))
    }

    /// Iterate over every square, rank by rank from rank 0.
    pub fn squares(&self) -> impl Iterator<Item = Square> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |rank| (0..width).map(move |file| Square::new(file, rank)))
    }

    /// Iterate over the occupied squares of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.color() == color)
                .map(|piece| (sq, piece))
        })
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant range, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Return `true` if the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Return `true` once the game has been decided.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Mark the game as decided. No move is legal afterwards.
    #[inline]
    pub fn mark_game_over(&mut self) {
        self.game_over = true;
    }

    /// Return the square of a pawn awaiting its promotion choice.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Return the king square of `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Return the geometry this position was built with.
    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[inline]
    pub(crate) fn castling_mut(&mut self) -> &mut CastleRights {
        &mut self.castling
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, range: Option<EnPassant>) {
        self.en_passant = range;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }

    #[inline]
    pub(crate) fn set_pending_promotion(&mut self, sq: Option<Square>) {
        self.pending_promotion = sq;
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        self.kings[color.index()] = sq;
    }

    /// Recompute whether the side to move is in check.
    pub(crate) fn refresh_check(&mut self) {
        let us = self.side_to_move;
        self.in_check = self.is_attacked(self.king_square(us), us.flip());
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

/// Positions compare equal when everything but the two move counters
/// matches. This is the identity threefold repetition works with.
impl PartialEq for Position {
    fn eq(&self, other: &Position) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.in_check == other.in_check
            && self.game_over == other.game_over
            && self.pending_promotion == other.pending_promotion
            && self.kings == other.kings
            && self.geometry == other.geometry
            && self.cells == other.cells
    }
}

impl Eq for Position {}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{self}\")")
    }
}

/// Wrapper for pretty-printing a position as a grid with coordinates.
pub struct PrettyBoard<'a>(&'a Position);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        let label_width = (position.height as u16).to_string().len();
        for rank in (0..position.height).rev() {
            write!(f, "{:>label_width$}  ", rank as u16 + 1)?;
            for file in 0..position.width {
                let c = position
                    .piece_at(Square::new(file, rank))
                    .map_or('.', |piece| piece.letter());
                if file + 1 < position.width {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "{:label_width$}  ", "")?;
        for file in 0..position.width {
            let c = (b'a' + file) as char;
            if file + 1 < position.width {
                write!(f, "{c} ")?;
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
