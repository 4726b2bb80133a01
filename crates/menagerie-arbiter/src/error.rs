//! Match construction errors.

use menagerie_core::{ConfigError, FenError};

/// Errors that can occur when setting up a match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The starting notation could not be decoded.
    #[error("invalid starting position: {source}")]
    Fen {
        /// The underlying decoding error.
        #[from]
        source: FenError,
    },

    /// The match configuration was rejected.
    ///
    /// Produced by `?` on a [`MatchConfig::with_promotions`] or
    /// [`Geometry::new`] error inside a function returning `MatchError`.
    ///
    /// [`MatchConfig::with_promotions`]: crate::MatchConfig::with_promotions
    /// [`Geometry::new`]: menagerie_core::Geometry::new
    #[error("invalid match configuration: {source}")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },
}

#[cfg(test)]
mod tests {
    use super::MatchError;
    use crate::config::MatchConfig;
    use crate::game::Match;
    use menagerie_core::{ConfigError, FenError, STARTING_FEN};

    #[test]
    fn wraps_core_errors() {
        let err: MatchError = FenError::WrongFieldCount { found: 3 }.into();
        assert_eq!(
            format!("{err}"),
            "invalid starting position: expected 6 FEN fields, found 3"
        );

        let err: MatchError = ConfigError::ZeroPawnSquares.into();
        assert!(matches!(err, MatchError::Config { .. }));
    }

    #[test]
    fn config_errors_propagate_with_question_mark() {
        fn setup(letters: &str) -> Result<Match, MatchError> {
            let config = MatchConfig::default().with_promotions(letters)?;
            Match::new(STARTING_FEN, config)
        }

        assert!(setup("qn").is_ok());
        assert!(matches!(setup("k"), Err(MatchError::Config { .. })));
    }
}
