//! Perft (performance test) for move legality verification.

use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Pieces a pending promotion is expanded into.
const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Every successor of `position` with its move label. A move that leaves a
/// promotion pending yields one successor per promotion piece.
fn successors(position: &Position) -> Vec<(String, Position)> {
    let us = position.side_to_move();
    let mut children = Vec::new();

    for (from, _) in position.pieces_of(us) {
        for to in position.squares() {
            let Some(child) = position.try_move(from, to) else {
                continue;
            };
            if child.pending_promotion().is_none() {
                children.push((format!("{from}{to}"), child));
                continue;
            }
            for kind in PROMOTION_KINDS {
                let mut promoted = child.clone();
                if promoted.complete_promotion(kind) {
                    children.push((format!("{from}{to}{kind}"), promoted));
                }
            }
        }
    }
    children
}

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves, each promotion choice counted separately.
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let children = successors(position);

    if depth == 1 {
        return children.len() as u64;
    }

    children
        .iter()
        .map(|(_, child)| perft(child, depth - 1))
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move, node_count)` pairs sorted alphabetically.
pub fn divide(position: &Position, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = successors(position)
        .into_iter()
        .map(|(label, child)| {
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (label, count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
