use chess_core::{Board, ChessError, Color, PieceType, Position};

fn pos(notation: &str) -> Position {
    Position::from_notation(notation).unwrap()
}

#[test]
fn starting_position_piece_counts() {
    let board = Board::new();
    let pieces: Vec<_> = board.occupied_squares().map(|(_, piece)| *piece).collect();
    assert_eq!(pieces.len(), 32);

    for color in [Color::White, Color::Black] {
        let count = |piece_type| {
            pieces
                .iter()
                .filter(|piece| piece.color == color && piece.piece_type == piece_type)
                .count()
        };
        assert_eq!(pieces.iter().filter(|piece| piece.color == color).count(), 16);
        assert_eq!(count(PieceType::Pawn), 8);
        assert_eq!(count(PieceType::Rook), 2);
        assert_eq!(count(PieceType::Knight), 2);
        assert_eq!(count(PieceType::Bishop), 2);
        assert_eq!(count(PieceType::Queen), 1);
        assert_eq!(count(PieceType::King), 1);
    }

    let mut ids: Vec<_> = pieces.iter().map(|piece| piece.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 32);
}

#[test]
fn every_available_square_can_be_committed() {
    let board = Board::new();
    for (origin, piece) in board.occupied_squares() {
        for destination in piece.available_squares(&board).unwrap() {
            let mut after = board.clone();
            after.move_piece(piece.id(), destination).unwrap();

            let moved = after.get_piece_at(destination).unwrap().unwrap();
            assert_eq!(moved.id(), piece.id());
            assert!(after.get_piece_at(origin).unwrap().is_none());
        }
    }
}

#[test]
fn opening_moves_from_the_starting_position() {
    let board = Board::new();
    let mut total = 0;
    for (_, piece) in board.occupied_squares() {
        let squares = piece.available_squares(&board).unwrap();
        match piece.piece_type {
            PieceType::Pawn => assert_eq!(squares.len(), 2),
            PieceType::Knight => assert_eq!(squares.len(), 2),
            _ => assert!(squares.is_empty(), "{:?} should be boxed in", piece),
        }
        total += squares.len();
    }
    assert_eq!(total, 40);
}

#[test]
fn short_game_through_notation() {
    let mut board = Board::new();

    let white_pawn = board.piece_at_notation("e2").unwrap().unwrap().id();
    assert_eq!(board.available_notations(white_pawn).unwrap(), ["e3", "e4"]);
    board.move_piece_to_notation(white_pawn, "e4").unwrap();
    assert_eq!(board.available_notations(white_pawn).unwrap(), ["e5"]);

    let black_pawn = board.piece_at_notation("d7").unwrap().unwrap().id();
    board.move_piece_to_notation(black_pawn, "d5").unwrap();

    // Both pawns now attack each other
    assert_eq!(board.available_notations(white_pawn).unwrap(), ["e5", "d5"]);
    assert_eq!(board.available_notations(black_pawn).unwrap(), ["d4", "e4"]);

    let mv = board.move_piece_to_notation(white_pawn, "d5").unwrap();
    assert_eq!(mv.captured.map(|piece| piece.color), Some(Color::Black));
    assert_eq!(board.piece_count(), 31);
    assert_eq!(
        board.available_squares(black_pawn),
        Err(ChessError::PieceNotFound(black_pawn))
    );

    // The queen's diagonal opened up
    let black_queen = board.piece_at_notation("d8").unwrap().unwrap().id();
    assert_eq!(board.available_notations(black_queen).unwrap(), ["d7", "d6", "d5"]);
}

#[test]
fn king_can_be_captured_like_any_piece() {
    let mut board = Board::empty();
    let rook = board.place_piece(PieceType::Rook, Color::White, pos("e1")).unwrap();
    board.place_piece(PieceType::King, Color::Black, pos("e8")).unwrap();

    assert!(rook.available_squares(&board).unwrap().contains(&pos("e8")));
    let mv = board.move_piece(rook.id(), pos("e8")).unwrap();
    assert_eq!(mv.captured.map(|piece| piece.piece_type), Some(PieceType::King));
    assert_eq!(board.piece_count(), 1);
}

#[test]
fn rows_run_top_to_bottom() {
    let board = Board::new();
    let rows: Vec<_> = board.rows().collect();
    assert_eq!(rows.len(), 8);
    assert!(rows[0].iter().all(|cell| cell.map(|piece| piece.color) == Some(Color::Black)));
    assert!(rows[3].iter().all(Option::is_none));
    assert!(rows[7].iter().all(|cell| cell.map(|piece| piece.color) == Some(Color::White)));
}
