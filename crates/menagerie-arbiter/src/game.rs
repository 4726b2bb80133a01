//! The match: a position plus repetition history and the game result.

use std::fmt;

use menagerie_core::{PieceKind, Position, Square};
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::outcome::{Cause, GameResult, Status};

/// A game in progress or finished.
///
/// Every accepted move and promotion re-derives the repetition window and
/// the result. Once decided, no further move is accepted.
#[derive(Debug, Clone)]
pub struct Match {
    position: Position,
    /// Positions since the last irreversible move, oldest first.
    history: Vec<Position>,
    /// Positions already seen twice within the window.
    repeated: Vec<Position>,
    result: Option<GameResult>,
    promotion_options: Vec<PieceKind>,
}

impl Match {
    /// Start a match from `fen` under `config`.
    ///
    /// The starting position is judged immediately, so a match can begin
    /// already decided (e.g. a stalemate position).
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Fen`] if the notation cannot be decoded.
    pub fn new(fen: &str, config: MatchConfig) -> Result<Match, MatchError> {
        let position = Position::from_fen(fen, config.geometry())?;
        let mut game = Match {
            position,
            history: Vec::new(),
            repeated: Vec::new(),
            result: None,
            promotion_options: config.promotion_options().to_vec(),
        };
        game.resolve_termination();
        game.history.push(game.position.clone());
        Ok(game)
    }

    /// Play the piece on `from` to `to`. Returns `false`, changing nothing,
    /// if the match is decided or the move is illegal.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        if let Some(result) = self.result {
            debug!(%from, %to, %result, "move rejected, match is decided");
            return false;
        }
        let Some(next) = self.position.try_move(from, to) else {
            debug!(%from, %to, "illegal move rejected");
            return false;
        };

        let castling_before = self.position.castling();
        self.position = next;

        if self.position.halfmove_clock() == 0 || self.position.castling() != castling_before {
            debug!(
                positions = self.history.len(),
                "irreversible move, clearing repetition history"
            );
            self.history.clear();
            self.repeated.clear();
        }

        self.resolve_termination();
        self.history.push(self.position.clone());

        if self.position.pending_promotion().is_some() && self.promotion_options.len() == 1 {
            let only = self.promotion_options[0];
            self.apply_promotion(only);
        }
        true
    }

    /// Choose the piece a pending promotion becomes. Returns `false`,
    /// changing nothing, if no promotion is pending or `letter` is not one of
    /// the configured options.
    pub fn promote(&mut self, letter: char) -> bool {
        let Some(kind) = PieceKind::from_letter(letter) else {
            debug!(%letter, "promotion rejected, not a piece letter");
            return false;
        };
        if !self.promotion_options.contains(&kind) {
            debug!(%letter, "promotion rejected, not an offered option");
            return false;
        }
        self.apply_promotion(kind)
    }

    fn apply_promotion(&mut self, kind: PieceKind) -> bool {
        if !self.position.complete_promotion(kind) {
            debug!(%kind, "promotion rejected, nothing pending");
            return false;
        }
        self.resolve_termination();
        self.history.push(self.position.clone());
        true
    }

    /// Judge the current position and record a decided result.
    ///
    /// Draw rules are checked before mate: the 50-move rule, then threefold
    /// repetition, then the absence of legal moves, then material.
    fn resolve_termination(&mut self) {
        let Some(result) = self.judge() else {
            return;
        };
        info!(%result, fen = %self.position, "match decided");
        self.result = Some(result);
        self.position.mark_game_over();
    }

    fn judge(&mut self) -> Option<GameResult> {
        if self.position.halfmove_clock() > 100 {
            return Some(GameResult::draw(Cause::FiftyMoveRule));
        }

        if self.repeated.contains(&self.position) {
            return Some(GameResult::draw(Cause::ThreefoldRepetition));
        }
        if self.history.contains(&self.position) {
            self.repeated.push(self.position.clone());
        }

        if !self.position.has_legal_move() {
            let result = if self.position.in_check() {
                GameResult::checkmate(self.position.side_to_move().flip())
            } else {
                GameResult::draw(Cause::Stalemate)
            };
            return Some(result);
        }

        if !self.position.has_sufficient_material() {
            return Some(GameResult::draw(Cause::InsufficientMaterial));
        }

        None
    }

    /// The current position.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The result, once decided.
    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Return `true` once the game is over.
    #[inline]
    pub fn is_decided(&self) -> bool {
        self.result.is_some()
    }

    /// Where the match stands.
    ///
    /// Termination is re-derived automatically by [`Match::new`],
    /// [`Match::make_move`] and [`Match::promote`], so this is always current.
    pub fn status(&self) -> Status {
        match (self.result, self.position.pending_promotion()) {
            (Some(result), _) => Status::Decided(result),
            (None, Some(sq)) => Status::AwaitingPromotion(sq),
            (None, None) => Status::InProgress,
        }
    }

    /// The configured promotion options.
    #[inline]
    pub fn promotion_options(&self) -> &[PieceKind] {
        &self.promotion_options
    }

    /// Positions since the last irreversible move, oldest first.
    #[inline]
    pub fn history(&self) -> &[Position] {
        &self.history
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)
    }
}
