//! Core variant-chess rules: positions on arbitrary rectangular boards, fairy
//! piece capabilities, legality, move application and terminal predicates.

mod attacks;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod geometry;
mod make_move;
mod material;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use error::{ConfigError, FenError};
pub use fen::STARTING_FEN;
pub use geometry::Geometry;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::{MaterialClass, PieceKind, Rule, Step};
pub use position::{EnPassant, Position, PrettyBoard};
pub use square::Square;
