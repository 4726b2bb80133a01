//! Match outcomes and status.

use std::fmt;

use menagerie_core::{Color, Square};

/// Who won, if anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cause {
    /// More than 100 half-moves without a capture or pawn move.
    FiftyMoveRule,
    /// The same position arose a third time.
    ThreefoldRepetition,
    /// The side to move is in check with no legal move.
    Checkmate,
    /// The side to move is not in check but has no legal move.
    Stalemate,
    /// Neither side can mate with the remaining pieces.
    InsufficientMaterial,
}

/// A decided game: outcome plus cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameResult {
    outcome: Outcome,
    cause: Cause,
}

impl GameResult {
    /// A win for `winner` by checkmate.
    pub const fn checkmate(winner: Color) -> GameResult {
        let outcome = match winner {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        };
        GameResult {
            outcome,
            cause: Cause::Checkmate,
        }
    }

    /// A draw for the given reason.
    pub const fn draw(cause: Cause) -> GameResult {
        GameResult {
            outcome: Outcome::Draw,
            cause,
        }
    }

    #[inline]
    pub const fn outcome(self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub const fn cause(self) -> Cause {
        self.cause
    }

    /// The winning side, or `None` for a draw.
    pub const fn winner(self) -> Option<Color> {
        match self.outcome {
            Outcome::WhiteWins => Some(Color::White),
            Outcome::BlackWins => Some(Color::Black),
            Outcome::Draw => None,
        }
    }
}

/// The human-readable cause. These strings are matched on by callers and are
/// kept exactly as they have always been, spelling included.
impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match (self.outcome, self.cause) {
            (_, Cause::FiftyMoveRule) => "Draw by 50-move rule",
            (_, Cause::ThreefoldRepetition) => "Draw by 3-fold repitition",
            (Outcome::WhiteWins, Cause::Checkmate) => "White wins by Checkmate",
            (_, Cause::Checkmate) => "Black wins by Checkmate",
            (_, Cause::Stalemate) => "Draw by Stalemate",
            (_, Cause::InsufficientMaterial) => "Draw by insufficient material",
        };
        f.write_str(text)
    }
}

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Moves are being accepted.
    InProgress,
    /// A pawn on this square is waiting for its promotion choice.
    AwaitingPromotion(Square),
    /// The game is over.
    Decided(GameResult),
}

#[cfg(test)]
mod tests {
    use super::{Cause, GameResult, Outcome};
    use menagerie_core::Color;

    #[test]
    fn cause_strings() {
        let cases = [
            (GameResult::draw(Cause::FiftyMoveRule), "Draw by 50-move rule"),
            (
                GameResult::draw(Cause::ThreefoldRepetition),
                "Draw by 3-fold repitition",
            ),
            (GameResult::checkmate(Color::White), "White wins by Checkmate"),
            (GameResult::checkmate(Color::Black), "Black wins by Checkmate"),
            (GameResult::draw(Cause::Stalemate), "Draw by Stalemate"),
            (
                GameResult::draw(Cause::InsufficientMaterial),
                "Draw by insufficient material",
            ),
        ];
        for (result, text) in cases {
            assert_eq!(result.to_string(), text);
        }
    }

    #[test]
    fn winners() {
        let result = GameResult::checkmate(Color::Black);
        assert_eq!(result.outcome(), Outcome::BlackWins);
        assert_eq!(result.winner(), Some(Color::Black));
        assert_eq!(GameResult::draw(Cause::Stalemate).winner(), None);
    }
}
