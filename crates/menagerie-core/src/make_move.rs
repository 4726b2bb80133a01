//! Move application and promotion completion.

use tracing::{debug, trace};

use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::{PieceKind, Rule};
use crate::position::{EnPassant, Position};
use crate::square::Square;

impl Position {
    /// Apply a move in place without checking legality.
    ///
    /// Callers validate first (see [`Position::try_move`]). An empty source
    /// square or an off-board destination leaves the position unchanged.
    pub fn make_move(&mut self, from: Square, to: Square) {
        if !self.contains(to) {
            return;
        }
        let Some(piece) = self.piece_at(from) else {
            return;
        };
        trace!(%from, %to, %piece, "applying move");

        let us = self.side_to_move();
        let them = us.flip();
        let geometry = self.geometry();

        self.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        self.set_side_to_move(them);
        if them == Color::White {
            self.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }

        let df = to.file().abs_diff(from.file());
        let dr = to.rank().abs_diff(from.rank());

        match piece.kind().rule() {
            Rule::Pawn => {
                // In passing: the captured pawn stands just beyond the range.
                // Anything other than an enemy pawn there is left alone.
                if df == 1
                    && !self.is_occupied(to)
                    && let Some(range) = self.en_passant()
                    && range.contains(to)
                {
                    let victim_rank = match us {
                        Color::White => range.low().checked_sub(1),
                        Color::Black => range.high().checked_add(1),
                    };
                    let enemy_pawn = Piece::new(them, PieceKind::Pawn);
                    if let Some(victim) = victim_rank
                        .map(|rank| Square::new(to.file(), rank))
                        .filter(|&sq| self.piece_at(sq) == Some(enemy_pawn))
                    {
                        self.set(victim, None);
                    }
                }

                let range = (dr > 1).then(|| match us {
                    Color::White => EnPassant::new(from.file(), from.rank() + 1, to.rank() - 1),
                    Color::Black => EnPassant::new(from.file(), to.rank() + 1, from.rank() - 1),
                });
                self.set_en_passant(range);

                let far_rank = match us {
                    Color::White => self.height() - 1,
                    Color::Black => 0,
                };
                if to.rank() == far_rank {
                    debug!(square = %to, "promotion pending");
                    self.set_pending_promotion(Some(to));
                }

                self.set_halfmove_clock(0);
            }
            Rule::King => {
                self.set_en_passant(None);
                self.set_king_square(us, to);
                self.castling_mut().revoke_color(us);

                if df == 2 {
                    // The rook lands on the square the king passed over.
                    let rank = from.rank();
                    let (rook_file, landing) = if to.file() > from.file() {
                        (geometry.king_rook_file(), to.file() - 1)
                    } else {
                        (geometry.queen_rook_file(), to.file() + 1)
                    };
                    let rook_from = Square::new(rook_file, rank);
                    let rook = self.piece_at(rook_from);
                    self.set(rook_from, None);
                    self.set(Square::new(landing, rank), rook);
                }
            }
            _ => self.set_en_passant(None),
        }

        // Leaving a castling rook square on our king's rank.
        if from.rank() == self.king_square(us).rank() {
            if from.file() == geometry.king_rook_file() {
                self.castling_mut().revoke(us, CastleSide::KingSide);
            } else if from.file() == geometry.queen_rook_file() {
                self.castling_mut().revoke(us, CastleSide::QueenSide);
            }
        }

        if self.is_occupied(to) {
            self.set_halfmove_clock(0);
            // Capturing onto the opponent's castling rook square.
            if to.rank() == self.king_square(them).rank() {
                if to.file() == geometry.king_rook_file() {
                    self.castling_mut().revoke(them, CastleSide::KingSide);
                } else if to.file() == geometry.queen_rook_file() {
                    self.castling_mut().revoke(them, CastleSide::QueenSide);
                }
            }
        }

        self.set(to, Some(piece));
        self.set(from, None);
        self.refresh_check();
    }

    /// Replace the pawn awaiting promotion with a piece of `kind`.
    ///
    /// Returns `false`, changing nothing, when no promotion is pending or
    /// `kind` is royal. Check is recomputed for the side to move.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> bool {
        let Some(sq) = self.pending_promotion() else {
            return false;
        };
        if kind.is_royal() {
            return false;
        }
        let Some(pawn) = self.piece_at(sq) else {
            return false;
        };

        trace!(square = %sq, %kind, "completing promotion");
        self.set(sq, Some(Piece::new(pawn.color(), kind)));
        self.set_pending_promotion(None);
        self.refresh_check();
        true
    }
}
