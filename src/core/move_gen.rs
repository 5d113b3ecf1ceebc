//! Move generation for a single piece.
//!
//! Moves are listed, never applied. Nothing here checks whether a move leaves
//! the mover's own king attacked.

use super::{
    board::Board,
    color::Color,
    notation::{
        notate_capture, notate_en_passant, notate_move, notate_promotion, parse_double_step,
        parse_landing_square,
    },
    piece::{Piece, PieceKind},
    rules::Rules,
    square::{Square, SquareDelta, BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRS, ROOK_DIRS},
};

/// Dispatch from piece kind to its movement algorithm
pub fn available_moves(piece: Piece, board: &Board, source: Square) -> Vec<String> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece.color, board, board.rules, source, board.last_move()),
        PieceKind::Knight => step_moves(piece, board, source, &KNIGHT_OFFSETS),
        PieceKind::King => step_moves(piece, board, source, &KING_OFFSETS),
        PieceKind::Bishop => ray_moves(piece, board, source, &BISHOP_DIRS),
        PieceKind::Rook => ray_moves(piece, board, source, &ROOK_DIRS),
        PieceKind::Queen => ray_moves(piece, board, source, &QUEEN_DIRS),
    }
}

/// Fixed-offset movement: one step to each offset, quiet or capture
pub fn step_moves(piece: Piece, board: &Board, source: Square, offsets: &[SquareDelta]) -> Vec<String> {
    let rules = board.rules;
    let Some(from) = rules.square_label(source) else {
        return Vec::new();
    };
    let letter = piece.kind.notation();

    offsets
        .iter()
        .filter_map(|&offset| {
            let target = source + offset;
            let to = rules.square_label(target)?;
            match board.piece_at_coord(target) {
                None => notate_move(letter, Some(&from), Some(&to)),
                Some(other) if piece.is_enemy(Some(&other)) => {
                    notate_capture(letter, Some(&from), Some(&to))
                }
                Some(_) => None,
            }
        })
        .collect()
}

/// Sliding movement: walk each direction until the edge or the first piece
pub fn ray_moves(piece: Piece, board: &Board, source: Square, dirs: &[SquareDelta]) -> Vec<String> {
    let rules = board.rules;
    let Some(from) = rules.square_label(source) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    for &dir in dirs {
        cast_ray(piece, board, &from, source + dir, dir, &mut moves);
    }
    moves
}

fn cast_ray(
    piece: Piece,
    board: &Board,
    from: &str,
    start: Square,
    dir: SquareDelta,
    moves: &mut Vec<String>,
) {
    let letter = piece.kind.notation();
    let mut target = start;

    while let Some(to) = board.rules.square_label(target) {
        match board.piece_at_coord(target) {
            None => moves.extend(notate_move(letter, Some(from), Some(&to))),
            Some(other) => {
                if piece.is_enemy(Some(&other)) {
                    moves.extend(notate_capture(letter, Some(from), Some(&to)));
                }
                return;
            }
        }
        target = target + dir;
    }
}

/// Pawn movement: forward steps (with promotion), diagonal captures, en passant
pub fn pawn_moves(
    color: Color,
    board: &Board,
    rules: &Rules,
    source: Square,
    last_move: Option<&str>,
) -> Vec<String> {
    let Some(from) = rules.square_label(source) else {
        return Vec::new();
    };

    let mut moves = forward_moves(color, board, rules, source, &from);
    moves.extend(diagonal_captures(color, board, rules, source, &from));
    moves.extend(en_passant(color, board, rules, source, &from, last_move));
    moves
}

fn forward_moves(color: Color, board: &Board, rules: &Rules, source: Square, from: &str) -> Vec<String> {
    let forward = SquareDelta::new(rules.pawn_direction[color], 0);
    let steps = if rules.is_pawn_start(color, source) { 2 } else { 1 };

    let mut moves = Vec::new();
    let mut target = source;
    for _ in 0..steps {
        target = target + forward;
        let Some(to) = rules.square_label(target) else {
            break;
        };
        if !board.is_empty_coord(target) {
            break;
        }

        let notation = if rules.is_promotion(color, target) {
            notate_promotion(Some(from), Some(&to))
        } else {
            notate_move("", Some(from), Some(&to))
        };
        moves.extend(notation);
    }
    moves
}

fn diagonal_targets(color: Color, rules: &Rules, source: Square) -> [Square; 2] {
    let dr = rules.pawn_direction[color];
    [
        source + SquareDelta::new(dr, -1),
        source + SquareDelta::new(dr, 1),
    ]
}

// Capturing onto the back rank is notated as a plain capture; promotion is only
// produced by forward moves.
fn diagonal_captures(color: Color, board: &Board, rules: &Rules, source: Square, from: &str) -> Vec<String> {
    let pawn = Piece::new(PieceKind::Pawn, color);

    diagonal_targets(color, rules, source)
        .into_iter()
        .filter(|&target| pawn.is_enemy(board.piece_at_coord(target).as_ref()))
        .filter_map(|target| {
            let to = rules.square_label(target)?;
            notate_capture("", Some(from), Some(&to))
        })
        .collect()
}

fn en_passant(
    color: Color,
    board: &Board,
    rules: &Rules,
    source: Square,
    from: &str,
    last_move: Option<&str>,
) -> Option<String> {
    let last_move = last_move?;
    let step = parse_double_step(rules, last_move)?;

    let landing = rules.label_to_coord(&parse_landing_square(rules, last_move)?)?;
    let victim = board.piece_at_coord(landing)?;
    let beside = landing.row == source.row && (landing.col - source.col).abs() == 1;

    let capturable = victim.kind == PieceKind::Pawn
        && victim.color != color
        && beside
        && board.is_empty_coord(step.skipped)
        && diagonal_targets(color, rules, source).contains(&step.skipped);
    if !capturable {
        return None;
    }

    let to = rules.square_label(step.skipped)?;
    notate_en_passant("", Some(from), Some(&to))
}
