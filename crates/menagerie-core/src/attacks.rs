//! Attack detection by inverse probing.
//!
//! Instead of generating every enemy move, probes are cast outward from the
//! target square with each geometry and the piece found at the end of the
//! probe is asked whether it moves that way.

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::{Rule, Step};
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Return `true` if `sq` is attacked by any piece of `by`.
    ///
    /// Obstacles and wildcard pieces never attack. The result does not depend
    /// on whose turn it is.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        let enemy_on = |target: Option<Square>| -> Option<Piece> {
            target
                .and_then(|t| self.piece_at(t))
                .filter(|piece| piece.color() == by)
        };

        // Leapers: a piece exactly one step away.
        for step in Step::LEAPS {
            for (df, dr) in step.orientations() {
                if let Some(piece) = enemy_on(self.step(sq, df, dr))
                    && piece.kind().leaps().contains(&step)
                {
                    return true;
                }
            }
        }

        // Pawns capture diagonally forward, so look diagonally backward from
        // the attacker's point of view.
        for df in [-1, 1] {
            if let Some(piece) = enemy_on(self.step(sq, df, -by.forward()))
                && piece.kind().rule() == Rule::Pawn
            {
                return true;
            }
        }

        // Riders: the first piece along each ray.
        for step in Step::RIDES {
            for (df, dr) in step.orientations() {
                if let Some(piece) = enemy_on(self.ray_target(sq, df, dr))
                    && piece.kind().rides().contains(&step)
                {
                    return true;
                }
            }
        }

        false
    }

    /// Walk from `sq` in steps of `(df, dr)` and return the first occupied
    /// square, or `None` if the ray leaves the board first.
    pub(crate) fn ray_target(&self, sq: Square, df: i16, dr: i16) -> Option<Square> {
        let mut current = sq;
        loop {
            current = self.step(current, df, dr)?;
            if self.is_occupied(current) {
                return Some(current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Color;
    use crate::position::Position;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn starting_position_attacks() {
        let position = Position::starting_position();
        // Pawns on rank 2 cover rank 3.
        assert!(position.is_attacked(sq("e3"), Color::White));
        assert!(position.is_attacked(sq("a3"), Color::White));
        // Knights reach c3 and f3, nothing reaches rank 4.
        assert!(position.is_attacked(sq("c3"), Color::White));
        assert!(!position.is_attacked(sq("e4"), Color::White));
        assert!(position.is_attacked(sq("f6"), Color::Black));
        assert!(!position.is_attacked(sq("e5"), Color::Black));
    }

    #[test]
    fn riders_are_blocked() {
        let position: Position = "4k3/8/8/8/r2P3K/8/8/8 w - - 0 1".parse().unwrap();
        assert!(position.is_attacked(sq("c4"), Color::Black));
        assert!(position.is_attacked(sq("d4"), Color::Black));
        assert!(!position.is_attacked(sq("e4"), Color::Black));
        assert!(!position.is_attacked(sq("h4"), Color::Black));
    }

    #[test]
    fn pawn_attacks_depend_on_color() {
        let position: Position = "4k3/8/8/3p4/8/3P4/8/4K3 w - - 0 1".parse().unwrap();
        assert!(position.is_attacked(sq("c4"), Color::Black));
        assert!(position.is_attacked(sq("e4"), Color::White));
        assert!(!position.is_attacked(sq("c6"), Color::Black));
        assert!(!position.is_attacked(sq("c2"), Color::White));
        assert!(!position.is_attacked(sq("d4"), Color::White));
    }

    #[test]
    fn fairy_leapers() {
        // Camel on d4, zebra on e5, champion on b7.
        let position: Position = "4k3/1H6/8/4Z3/3L4/8/8/K7 b - - 0 1".parse().unwrap();
        assert!(position.is_attacked(sq("e1"), Color::White)); // camel
        assert!(position.is_attacked(sq("e7"), Color::White)); // camel
        assert!(position.is_attacked(sq("g8"), Color::White)); // zebra
        assert!(position.is_attacked(sq("h7"), Color::White)); // zebra
        assert!(position.is_attacked(sq("d7"), Color::White)); // champion, two files
        assert!(position.is_attacked(sq("d5"), Color::White)); // champion, two diagonally
        assert!(!position.is_attacked(sq("c5"), Color::White));
        assert!(!position.is_attacked(sq("e6"), Color::White));
    }

    #[test]
    fn nightrider_rides_knight_steps() {
        let position: Position = "4k3/8/8/8/8/8/8/I3K3 w - - 0 1".parse().unwrap();
        assert!(position.is_attacked(sq("b3"), Color::White));
        assert!(position.is_attacked(sq("c5"), Color::White));
        assert!(position.is_attacked(sq("d7"), Color::White));
        assert!(!position.is_attacked(sq("c4"), Color::White));

        let blocked: Position = "4k3/8/8/8/8/1p6/8/I3K3 w - - 0 1".parse().unwrap();
        assert!(blocked.is_attacked(sq("b3"), Color::White));
        assert!(!blocked.is_attacked(sq("c5"), Color::White));
    }

    #[test]
    fn obstacles_and_wildcards_never_attack() {
        let position: Position = "4k3/8/8/3O4/8/3E4/8/K7 w - - 0 1".parse().unwrap();
        for target in ["d4", "e4", "c6", "d6", "e2", "d2"] {
            assert!(!position.is_attacked(sq(target), Color::White), "{target}");
        }
    }

    #[test]
    fn kings_attack_adjacent_squares() {
        let position = Position::starting_position();
        assert!(position.is_attacked(sq("d1"), Color::White));
        assert!(!position.is_attacked(sq("e3"), Color::Black));
    }
}
