//! Error types for notation decoding and board configuration.

/// Errors that occur when decoding a position from its notation.
///
/// Decoding is all-or-nothing: any of these leaves no partial position behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The notation does not have exactly 6 whitespace-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The board is empty or the first rank describes no squares.
    #[error("piece placement describes an empty board")]
    EmptyBoard,
    /// The board is wider than the 26 files the algebraic form can name.
    #[error("board is {width} files wide, at most 26 are supported")]
    TooWide {
        /// Inferred width.
        width: usize,
    },
    /// The board has more ranks than a square coordinate can hold.
    #[error("board has {height} ranks, at most 255 are supported")]
    TooTall {
        /// Number of ranks found.
        height: usize,
    },
    /// A rank describes a different number of squares than the first one.
    #[error("rank {rank_index} describes {length} squares, expected {width}")]
    NonRectangular {
        /// Zero-based index in the notation (0 = top rank).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
        /// Width inferred from the first rank.
        width: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    KingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a square on the board.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter (halfmove clock or fullmove number) is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// A configured castling rook file lies beyond the board's width.
    #[error("rook file {file} lies outside a board {width} files wide")]
    RookFileOffBoard {
        /// 1-indexed file.
        file: usize,
        /// Board width.
        width: usize,
    },
}

/// Errors from validating board configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Rook files are 1-indexed; zero names no file.
    #[error("rook files are 1-indexed, got 0")]
    ZeroRookFile,
    /// The queen-rook file must lie left of the king-rook file.
    #[error("queen rook file {queen} must be left of king rook file {king}")]
    RookFilesOrder {
        /// 1-indexed queen-rook file.
        queen: usize,
        /// 1-indexed king-rook file.
        king: usize,
    },
    /// Pawns must be allowed to advance at least one square.
    #[error("pawn first move must cover at least 1 square")]
    ZeroPawnSquares,
    /// The promotion option set is empty or names an unusable capability.
    #[error("invalid promotion options \"{options}\": {reason}")]
    PromotionOptions {
        /// The options as given.
        options: String,
        /// Why they were rejected.
        reason: &'static str,
    },
}
