//! Mating-material evaluation.

use crate::piece_kind::MaterialClass;
use crate::position::Position;

impl Position {
    /// Return `true` if the pieces on the board could still deliver mate.
    ///
    /// Colors are pooled. Any piece that mates alone settles it. Otherwise two
    /// mobile helpers suffice, one mobile helper needs any colour-bound piece
    /// or barrier beside it, and without mobile helpers at least two of
    /// {light-bound, dark-bound, barrier} must be present.
    pub fn has_sufficient_material(&self) -> bool {
        let mut mobile = 0usize;
        let mut bound = [0usize; 2];
        let mut barriers = 0usize;

        for sq in self.squares() {
            let Some(piece) = self.piece_at(sq) else {
                continue;
            };
            match piece.kind().material_class() {
                MaterialClass::MatesAlone => return true,
                MaterialClass::Mobile => mobile += 1,
                MaterialClass::ColourBound => bound[sq.parity()] += 1,
                MaterialClass::Barrier => barriers += 1,
                MaterialClass::Ignored => {}
            }
        }

        match mobile {
            0 => [bound[0] > 0, bound[1] > 0, barriers > 0]
                .into_iter()
                .filter(|&present| present)
                .count()
                >= 2,
            1 => bound[0] + bound[1] + barriers > 0,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::position::Position;

    fn sufficient(fen: &str) -> bool {
        fen.parse::<Position>().unwrap().has_sufficient_material()
    }

    #[test]
    fn bare_kings() {
        assert!(!sufficient("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
    }

    #[test]
    fn pieces_that_mate_alone() {
        assert!(sufficient("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"));
        assert!(sufficient("4k3/8/8/8/8/8/8/R3K3 w - - 0 1"));
        assert!(sufficient("4k3/8/8/8/8/8/8/X3K3 w - - 0 1"));
        assert!(sufficient("4k3/8/8/8/8/8/8/E3K3 w - - 0 1"));
    }

    #[test]
    fn single_minor_pieces() {
        assert!(!sufficient("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1"));
        assert!(!sufficient("4k3/8/8/8/8/8/8/1N2K3 w - - 0 1"));
        assert!(!sufficient("4k3/8/8/8/8/8/8/1Z2K3 w - - 0 1"));
    }

    #[test]
    fn colour_bound_pairs() {
        // c1 and f1 are on opposite colours, c1 and e3 on the same one.
        assert!(sufficient("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1"));
        assert!(!sufficient("4k3/8/8/8/8/4B3/8/2B1K3 w - - 0 1"));
        assert!(sufficient("2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1"));
        assert!(sufficient("4k3/8/8/8/8/8/8/2B1K2O w - - 0 1"));
    }

    #[test]
    fn mobile_helpers() {
        assert!(sufficient("4k3/8/8/8/8/8/8/1NN1K3 w - - 0 1"));
        assert!(sufficient("1n2k3/8/8/8/8/8/8/1N2K3 w - - 0 1"));
        assert!(sufficient("4k3/8/8/8/8/8/8/1N2KB2 w - - 0 1"));
        assert!(sufficient("4k3/8/8/8/8/8/8/1W2K2O w - - 0 1"));
    }
}
