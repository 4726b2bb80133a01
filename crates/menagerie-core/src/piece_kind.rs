//! Piece capabilities: the letter table that decides how each piece moves.
//!
//! A capability is a closed enum. Each variant maps to a declarative rule
//! built from [`Step`] geometries: *leaps* jump straight to the target,
//! *rides* repeat the same step along a ray and are blocked by the first
//! occupied square. Pawns, kings and obstacles carry extra rules on top.

use std::fmt;

/// An unordered pair of absolute displacements `(a, b)`, taken in every
/// orientation: `(±a, ±b)` and `(±b, ±a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step(pub u8, pub u8);

impl Step {
    /// One square orthogonally.
    pub const WAZIR: Step = Step(1, 0);
    /// One square diagonally.
    pub const FERZ: Step = Step(1, 1);
    /// Two squares orthogonally.
    pub const DABBABA: Step = Step(2, 0);
    /// Two squares diagonally.
    pub const ALFIL: Step = Step(2, 2);
    /// The knight's (2, 1).
    pub const KNIGHT: Step = Step(2, 1);
    /// The camel's (3, 1).
    pub const CAMEL: Step = Step(3, 1);
    /// The zebra's (3, 2).
    pub const ZEBRA: Step = Step(3, 2);

    /// Every leap geometry some capability uses.
    pub const LEAPS: [Step; 7] = [
        Step::KNIGHT,
        Step::CAMEL,
        Step::ZEBRA,
        Step::WAZIR,
        Step::DABBABA,
        Step::FERZ,
        Step::ALFIL,
    ];

    /// Every ride geometry some capability uses.
    pub const RIDES: [Step; 3] = [Step::WAZIR, Step::FERZ, Step::KNIGHT];

    /// Return the distinct `(file, rank)` deltas of this step.
    pub fn orientations(self) -> Vec<(i16, i16)> {
        let (a, b) = (self.0 as i16, self.1 as i16);
        let mut dirs = Vec::with_capacity(8);
        for (x, y) in [(a, b), (b, a)] {
            for (sx, sy) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
                let dir = (x * sx, y * sy);
                if !dirs.contains(&dir) {
                    dirs.push(dir);
                }
            }
        }
        dirs
    }

    /// Return `true` if a single leap of this step covers the displacement.
    #[inline]
    pub fn leaps(self, df: i16, dr: i16) -> bool {
        let (p, q) = (df.unsigned_abs(), dr.unsigned_abs());
        let (a, b) = (self.0 as u16, self.1 as u16);
        (p == a && q == b) || (p == b && q == a)
    }

    /// Decompose a displacement into `k` repetitions of one orientation of
    /// this step. Returns the unit delta and `k >= 1`.
    pub fn ride(self, df: i16, dr: i16) -> Option<(i16, i16, i16)> {
        self.orientations().into_iter().find_map(|(ux, uy)| {
            let k = if ux != 0 { df / ux } else { dr / uy };
            (k >= 1 && df == k * ux && dr == k * uy).then_some((ux, uy, k))
        })
    }
}

/// The special handling a capability gets beyond its leaps and rides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Only the leaps and rides apply.
    Geometric,
    /// Forward pushes, multi-square openers, diagonal captures, en passant.
    Pawn,
    /// Royal: leaps plus castling. Never captured.
    King,
    /// Moves to any empty square and never captures.
    Obstacle,
    /// Any destination is geometrically legal.
    Unconstrained,
}

/// How a piece counts towards mating material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialClass {
    /// Not counted (kings).
    Ignored,
    /// Can force mate with only its king's help.
    MatesAlone,
    /// Needs a partner to mate, but reaches squares of both colors.
    Mobile,
    /// Confined to squares of one color.
    ColourBound,
    /// A non-capturing obstacle that can still help box a king in.
    Barrier,
}

/// A piece capability, selected by its placement letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// `p`
    Pawn,
    /// `n`
    Knight,
    /// `b`
    Bishop,
    /// `r`
    Rook,
    /// `q`
    Queen,
    /// `k`
    King,
    /// `l`: (3, 1) leaper.
    Camel,
    /// `z`: (3, 2) leaper.
    Zebra,
    /// `x`: non-royal king step.
    Mann,
    /// `f`: single diagonal step.
    Ferz,
    /// `w`: single orthogonal step.
    Wazir,
    /// `h`: leaps up to two squares along any line.
    Champion,
    /// `i`: rides the knight's step.
    Nightrider,
    /// `a`: bishop + knight.
    Archbishop,
    /// `c`: rook + knight.
    Chancellor,
    /// `m`: queen + knight.
    Amazon,
    /// `o`: non-capturing obstacle.
    Obstacle,
    /// Any other letter: unconstrained. Holds the lowercase letter.
    Wildcard(char),
}

const NONE: &[Step] = &[];
const KING_STEPS: &[Step] = &[Step::WAZIR, Step::FERZ];
const CHAMPION_STEPS: &[Step] = &[Step::WAZIR, Step::FERZ, Step::DABBABA, Step::ALFIL];
const LINES: &[Step] = &[Step::WAZIR, Step::FERZ];
const KNIGHT: &[Step] = &[Step::KNIGHT];
const CAMEL: &[Step] = &[Step::CAMEL];
const ZEBRA: &[Step] = &[Step::ZEBRA];
const DIAGONAL: &[Step] = &[Step::FERZ];
const ORTHOGONAL: &[Step] = &[Step::WAZIR];

impl PieceKind {
    /// Every named capability (wildcards excluded).
    pub const ALL: [PieceKind; 17] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Camel,
        PieceKind::Zebra,
        PieceKind::Mann,
        PieceKind::Ferz,
        PieceKind::Wazir,
        PieceKind::Champion,
        PieceKind::Nightrider,
        PieceKind::Archbishop,
        PieceKind::Chancellor,
        PieceKind::Amazon,
        PieceKind::Obstacle,
    ];

    /// Return the lowercase placement letter.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Camel => 'l',
            PieceKind::Zebra => 'z',
            PieceKind::Mann => 'x',
            PieceKind::Ferz => 'f',
            PieceKind::Wazir => 'w',
            PieceKind::Champion => 'h',
            PieceKind::Nightrider => 'i',
            PieceKind::Archbishop => 'a',
            PieceKind::Chancellor => 'c',
            PieceKind::Amazon => 'm',
            PieceKind::Obstacle => 'o',
            PieceKind::Wildcard(c) => c,
        }
    }

    /// Parse a placement letter (case-insensitive). Any ASCII letter outside
    /// the table becomes a [`PieceKind::Wildcard`]; non-letters are rejected.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let lower = c.to_ascii_lowercase();
        let kind = PieceKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == lower)
            .unwrap_or(PieceKind::Wildcard(lower));
        Some(kind)
    }

    /// Steps this piece may leap (occupancy-independent).
    pub const fn leaps(self) -> &'static [Step] {
        match self {
            PieceKind::Knight | PieceKind::Archbishop | PieceKind::Chancellor | PieceKind::Amazon => {
                KNIGHT
            }
            PieceKind::Camel => CAMEL,
            PieceKind::Zebra => ZEBRA,
            PieceKind::Mann | PieceKind::King => KING_STEPS,
            PieceKind::Ferz => DIAGONAL,
            PieceKind::Wazir => ORTHOGONAL,
            PieceKind::Champion => CHAMPION_STEPS,
            _ => NONE,
        }
    }

    /// Steps this piece may ride, blocked by the first occupied square.
    pub const fn rides(self) -> &'static [Step] {
        match self {
            PieceKind::Bishop | PieceKind::Archbishop => DIAGONAL,
            PieceKind::Rook | PieceKind::Chancellor => ORTHOGONAL,
            PieceKind::Queen | PieceKind::Amazon => LINES,
            PieceKind::Nightrider => KNIGHT,
            _ => NONE,
        }
    }

    /// Extra handling on top of the leaps and rides.
    pub const fn rule(self) -> Rule {
        match self {
            PieceKind::Pawn => Rule::Pawn,
            PieceKind::King => Rule::King,
            PieceKind::Obstacle => Rule::Obstacle,
            PieceKind::Wildcard(_) => Rule::Unconstrained,
            _ => Rule::Geometric,
        }
    }

    /// Return `true` for the royal piece whose safety decides legality.
    #[inline]
    pub const fn is_royal(self) -> bool {
        matches!(self, PieceKind::King)
    }

    /// Mating-material classification.
    pub const fn material_class(self) -> MaterialClass {
        match self {
            PieceKind::King => MaterialClass::Ignored,
            PieceKind::Knight | PieceKind::Wazir | PieceKind::Zebra | PieceKind::Nightrider => {
                MaterialClass::Mobile
            }
            PieceKind::Bishop | PieceKind::Camel | PieceKind::Ferz => MaterialClass::ColourBound,
            PieceKind::Obstacle => MaterialClass::Barrier,
            _ => MaterialClass::MatesAlone,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::{MaterialClass, PieceKind, Rule, Step};

    #[test]
    fn letter_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.letter();
            assert_eq!(PieceKind::from_letter(c), Some(kind));
            assert_eq!(PieceKind::from_letter(c.to_ascii_uppercase()), Some(kind));
        }
    }

    #[test]
    fn unknown_letters_are_wildcards() {
        assert_eq!(PieceKind::from_letter('E'), Some(PieceKind::Wildcard('e')));
        assert_eq!(PieceKind::Wildcard('e').rule(), Rule::Unconstrained);
        assert_eq!(PieceKind::from_letter('1'), None);
        assert_eq!(PieceKind::from_letter('*'), None);
    }

    #[test]
    fn orientation_counts() {
        assert_eq!(Step::WAZIR.orientations().len(), 4);
        assert_eq!(Step::FERZ.orientations().len(), 4);
        assert_eq!(Step::ALFIL.orientations().len(), 4);
        assert_eq!(Step::KNIGHT.orientations().len(), 8);
        assert_eq!(Step::ZEBRA.orientations().len(), 8);
    }

    #[test]
    fn leap_matches_any_orientation() {
        assert!(Step::CAMEL.leaps(3, -1));
        assert!(Step::CAMEL.leaps(-1, 3));
        assert!(!Step::CAMEL.leaps(2, 2));
        assert!(Step::DABBABA.leaps(0, -2));
    }

    #[test]
    fn ride_decomposes_multiples() {
        assert_eq!(Step::FERZ.ride(3, -3), Some((1, -1, 3)));
        assert_eq!(Step::WAZIR.ride(0, 5), Some((0, 1, 5)));
        assert_eq!(Step::KNIGHT.ride(-4, 2), Some((-2, 1, 2)));
        assert_eq!(Step::KNIGHT.ride(3, 2), None);
        assert_eq!(Step::WAZIR.ride(1, 1), None);
    }

    #[test]
    fn compounds_combine_components() {
        assert_eq!(PieceKind::Amazon.rides(), PieceKind::Queen.rides());
        assert_eq!(PieceKind::Amazon.leaps(), PieceKind::Knight.leaps());
        assert_eq!(PieceKind::Archbishop.rides(), PieceKind::Bishop.rides());
        assert_eq!(PieceKind::Chancellor.rides(), PieceKind::Rook.rides());
    }

    #[test]
    fn material_classes() {
        assert_eq!(PieceKind::King.material_class(), MaterialClass::Ignored);
        assert_eq!(PieceKind::Pawn.material_class(), MaterialClass::MatesAlone);
        assert_eq!(PieceKind::Nightrider.material_class(), MaterialClass::Mobile);
        assert_eq!(PieceKind::Camel.material_class(), MaterialClass::ColourBound);
        assert_eq!(PieceKind::Obstacle.material_class(), MaterialClass::Barrier);
        assert_eq!(PieceKind::Wildcard('e').material_class(), MaterialClass::MatesAlone);
    }
}
