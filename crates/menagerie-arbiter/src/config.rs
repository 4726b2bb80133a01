//! Match configuration: board geometry plus the promotion option set.

use menagerie_core::{ConfigError, Geometry, PieceKind};

/// Promotion choices in standard chess.
const STANDARD_PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Parameters a [`Match`](crate::Match) is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    geometry: Geometry,
    promotion_options: Vec<PieceKind>,
}

impl MatchConfig {
    /// Create a configuration with `geometry` and the standard `qrbn` options.
    pub fn new(geometry: Geometry) -> MatchConfig {
        MatchConfig {
            geometry,
            promotion_options: STANDARD_PROMOTIONS.to_vec(),
        }
    }

    /// Replace the promotion options with the capabilities named by `letters`.
    ///
    /// Letters are case-insensitive and duplicates collapse. A single option
    /// makes every promotion automatic.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PromotionOptions`] for an empty set, a
    /// non-letter, a king or a pawn.
    pub fn with_promotions(mut self, letters: &str) -> Result<MatchConfig, ConfigError> {
        let reject = |reason: &'static str| ConfigError::PromotionOptions {
            options: letters.to_string(),
            reason,
        };

        let mut options = Vec::new();
        for c in letters.chars() {
            let kind = PieceKind::from_letter(c).ok_or_else(|| reject("options must be letters"))?;
            match kind {
                PieceKind::King => return Err(reject("cannot promote to a king")),
                PieceKind::Pawn => return Err(reject("cannot promote to a pawn")),
                _ => {}
            }
            if !options.contains(&kind) {
                options.push(kind);
            }
        }
        if options.is_empty() {
            return Err(reject("at least one option is required"));
        }

        self.promotion_options = options;
        Ok(self)
    }

    /// The board geometry.
    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The allowed promotion capabilities, in the order given.
    #[inline]
    pub fn promotion_options(&self) -> &[PieceKind] {
        &self.promotion_options
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig::new(Geometry::STANDARD)
    }
}
