//! Move legality and brute-force enumeration.
//!
//! Legality is copy-make: a move that passes the capability test is applied
//! to a clone and rejected if it leaves the mover's king attacked.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::Rule;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Return `true` if moving the piece on `from` to `to` is legal.
    #[inline]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.try_move(from, to).is_some()
    }

    /// Return the position after moving `from` to `to`, or `None` if the move
    /// is illegal. `self` is not modified.
    pub fn try_move(&self, from: Square, to: Square) -> Option<Position> {
        if self.is_game_over() || self.pending_promotion().is_some() || !self.contains(to) {
            return None;
        }

        let us = self.side_to_move();
        let piece = self.piece_at(from).filter(|piece| piece.color() == us)?;

        // Own pieces block, and kings are never captured.
        if let Some(target) = self.piece_at(to)
            && (target.color() == us || target.kind().is_royal())
        {
            return None;
        }

        if !self.reaches(from, to, piece) {
            return None;
        }

        let mut next = self.clone();
        next.make_move(from, to);
        (!next.is_attacked(next.king_square(us), us.flip())).then_some(next)
    }

    /// Enumerate every legal move by testing each own piece against each square.
    pub fn legal_moves(&self) -> Vec<Move> {
        let us = self.side_to_move();
        let mut moves = Vec::new();
        for (from, _) in self.pieces_of(us) {
            for to in self.squares() {
                if self.is_legal(from, to) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Return `true` if the side to move has a legal move, or a promotion
    /// choice still to make.
    pub fn has_legal_move(&self) -> bool {
        if self.pending_promotion().is_some() {
            return true;
        }
        let us = self.side_to_move();
        self.pieces_of(us)
            .any(|(from, _)| self.squares().any(|to| self.is_legal(from, to)))
    }

    /// Capability test: can `piece` on `from` reach `to`, ignoring king safety?
    fn reaches(&self, from: Square, to: Square, piece: Piece) -> bool {
        let df = to.file() as i16 - from.file() as i16;
        let dr = to.rank() as i16 - from.rank() as i16;

        match piece.kind().rule() {
            Rule::Unconstrained => true,
            Rule::Obstacle => !self.is_occupied(to),
            Rule::Pawn => self.pawn_reaches(from, to, piece.color(), df, dr),
            Rule::King => {
                self.geometric_reach(from, piece, df, dr)
                    || self.can_castle(from, to, piece.color(), df, dr)
            }
            Rule::Geometric => self.geometric_reach(from, piece, df, dr),
        }
    }

    fn geometric_reach(&self, from: Square, piece: Piece, df: i16, dr: i16) -> bool {
        let kind = piece.kind();
        if kind.leaps().iter().any(|step| step.leaps(df, dr)) {
            return true;
        }
        kind.rides().iter().any(|step| {
            step.ride(df, dr).is_some_and(|(ux, uy, k)| {
                (1..k).all(|i| {
                    self.step(from, ux * i, uy * i)
                        .is_some_and(|sq| !self.is_occupied(sq))
                })
            })
        })
    }

    fn pawn_reaches(&self, from: Square, to: Square, color: Color, df: i16, dr: i16) -> bool {
        let forward = dr * color.forward();

        if df != 0 {
            // Diagonal capture, in passing when the destination is empty.
            return df.abs() == 1
                && forward == 1
                && (self.is_occupied(to)
                    || self.en_passant().is_some_and(|range| range.contains(to)));
        }

        if forward < 1 || self.is_occupied(to) {
            return false;
        }
        if forward == 1 {
            return true;
        }

        let geometry = self.geometry();
        if forward > geometry.pawn_first_move_squares() as i16 {
            return false;
        }
        let from_back = match color {
            Color::White => from.rank() as u16 + 1,
            Color::Black => self.height() as u16 - from.rank() as u16,
        };
        if from_back > geometry.pawn_home_rows() as u16 {
            return false;
        }
        (1..forward).all(|i| {
            self.step(from, 0, i * color.forward())
                .is_some_and(|sq| !self.is_occupied(sq))
        })
    }

    fn can_castle(&self, from: Square, to: Square, color: Color, df: i16, dr: i16) -> bool {
        if dr != 0 || df.abs() != 2 {
            return false;
        }
        let (side, rook_file) = if df > 0 {
            (CastleSide::KingSide, self.geometry().king_rook_file())
        } else {
            (CastleSide::QueenSide, self.geometry().queen_rook_file())
        };
        if !self.castling().has(color, side) || self.in_check() {
            return false;
        }

        let rank = from.rank();
        let rook = self.piece_at(Square::new(rook_file, rank));
        if !rook.is_some_and(|piece| piece.color() == color) {
            return false;
        }

        let (low, high) = (from.file().min(rook_file), from.file().max(rook_file));
        if (low + 1..high).any(|file| self.is_occupied(Square::new(file, rank))) {
            return false;
        }

        let passed = Square::new(((from.file() as u16 + to.file() as u16) / 2) as u8, rank);
        !self.is_attacked(passed, color.flip())
    }
}
