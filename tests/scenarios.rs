use chess_movegen::core::{
    notation::parse_landing_square, square::ROOK_DIRS, Board, Color, Piece, PieceKind, Square,
    SquareDelta, RULES,
};
use test_case::test_case;

fn white(kind: PieceKind) -> Piece {
    Piece::new(kind, Color::White)
}

fn black(kind: PieceKind) -> Piece {
    Piece::new(kind, Color::Black)
}

fn board_with(pieces: &[(&str, Piece)]) -> Board<'static> {
    let mut board = Board::new(&RULES);
    for &(label, piece) in pieces {
        board.place(label, piece);
    }
    board
}

#[test]
fn pawn_on_start_row_moves_one_or_two() {
    let board = board_with(&[("e2", white(PieceKind::Pawn))]);
    assert_eq!(board.available_moves("e2"), vec!["e2-e3", "e2-e4"]);
}

#[test]
fn pawn_blocked_on_first_step_cannot_move() {
    let board = board_with(&[("e2", white(PieceKind::Pawn)), ("e3", black(PieceKind::Bishop))]);
    assert!(board.available_moves("e2").is_empty());
}

#[test]
fn rook_in_corner_of_empty_board() {
    let board = board_with(&[("a1", white(PieceKind::Rook))]);
    let moves = board.available_moves("a1");

    assert_eq!(moves.len(), 14);
    assert!(moves.iter().all(|m| m.contains('-') && !m.contains('x')));
}

#[test]
fn knight_captures_enemy_and_skips_friend() {
    let board = board_with(&[
        ("e4", white(PieceKind::Knight)),
        ("d6", black(PieceKind::Rook)),
        ("f6", white(PieceKind::Bishop)),
    ]);
    let moves = board.available_moves("e4");

    let captures: Vec<_> = moves.iter().filter(|m| m.contains('x')).collect();
    assert_eq!(captures, vec!["Ne4xd6"]);
    assert!(!moves.iter().any(|m| m.ends_with("f6")));
    assert_eq!(moves.iter().filter(|m| m.contains('-')).count(), 6);
}

#[test]
fn en_passant_after_double_step() {
    let mut board = Board::default();
    board.remove("d7");
    board.place("d5", black(PieceKind::Pawn));
    board.remove("e2");
    board.place("e5", white(PieceKind::Pawn));
    board.set_last_move(Some("d7-d5".to_string()));

    let moves = board.available_moves("e5");
    assert!(moves.contains(&"e5xd6ep".to_string()));
    assert_eq!(moves, vec!["e5-e6", "e5xd6ep"]);
}

#[test_case("Nb8-c6" ; "piece move")]
#[test_case("d6-d5" ; "single step")]
#[test_case("c7-c5" ; "double step elsewhere")]
fn no_en_passant_without_adjacent_double_step(last_move: &str) {
    let mut board = board_with(&[("e5", white(PieceKind::Pawn)), ("d5", black(PieceKind::Pawn))]);
    board.place("c5", black(PieceKind::Pawn));
    board.set_last_move(Some(last_move.to_string()));

    assert!(!board.available_moves("e5").iter().any(|m| m.ends_with("ep")));
}

fn ray_from_d4(board: &Board, dir: SquareDelta) -> Vec<String> {
    let source = Square::new(4, 3);
    board
        .available_moves("d4")
        .into_iter()
        .filter(|m| {
            let landing = parse_landing_square(&RULES, m)
                .and_then(|label| RULES.label_to_coord(&label))
                .unwrap();
            let delta = landing - source;
            delta.dr.signum() == dir.dr && delta.dc.signum() == dir.dc
        })
        .collect()
}

#[test]
fn sliding_rays_stop_at_distance() {
    for (dir, distance) in ROOK_DIRS.into_iter().zip([4, 3, 3, 4]) {
        let board = board_with(&[("d4", white(PieceKind::Rook))]);
        assert_eq!(ray_from_d4(&board, dir).len(), distance);

        // An enemy two steps out leaves one quiet move and the capture.
        let mut blocked = board.clone();
        let blocker = RULES.coord_to_label(4 + 2 * dir.dr, 3 + 2 * dir.dc).unwrap();
        blocked.place(&blocker, black(PieceKind::Knight));

        let moves = ray_from_d4(&blocked, dir);
        assert_eq!(moves.len(), 2);
        assert!(moves[0].starts_with("Rd4-"));
        assert_eq!(moves[1], format!("Rd4x{}", blocker));
    }
}

#[test]
fn queen_in_center_of_empty_board() {
    let board = board_with(&[("d4", black(PieceKind::Queen))]);
    assert_eq!(board.available_moves("d4").len(), 27);
}

#[test]
fn moves_for_side_from_start() {
    let board = Board::default();
    let moves = board.moves_for(Color::White);

    assert_eq!(moves.len(), 20);
    assert_eq!(moves.iter().filter(|m| m.starts_with('N')).count(), 4);
}

#[test]
fn out_of_bounds_queries_are_empty() {
    let board = Board::default();
    assert!(board.available_moves("i9").is_empty());
    assert!(board.is_empty("i9"));
    assert_eq!(board.piece_at("a10"), None);
}
