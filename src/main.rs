use std::io::{self, BufRead, Write};

use anyhow::Context;
use chess_core::{Board, Position};
use log::info;
use tracing_subscriber::EnvFilter;

const HELP: &str = "commands: <square> | <from> <to> | board | reset | help | quit";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut board = Board::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{board}\n{HELP}")?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["quit" | "exit"] => break,
            ["help"] => writeln!(stdout, "{HELP}")?,
            ["board"] => writeln!(stdout, "{board}")?,
            ["reset"] => {
                board.initialize();
                info!("board reset");
                writeln!(stdout, "{board}")?;
            }
            [square] => match show_squares(&board, square) {
                Ok(listing) => writeln!(stdout, "{listing}")?,
                Err(err) => writeln!(stdout, "error: {err}")?,
            },
            [from, to] => match play(&mut board, from, to) {
                Ok(()) => writeln!(stdout, "{board}")?,
                Err(err) => writeln!(stdout, "error: {err}")?,
            },
            _ => writeln!(stdout, "{HELP}")?,
        }
    }

    Ok(())
}

fn show_squares(board: &Board, square: &str) -> anyhow::Result<String> {
    let piece = board
        .piece_at_notation(square)?
        .with_context(|| format!("no piece on {square}"))?;
    let squares = board.available_notations(piece.id())?;

    if squares.is_empty() {
        Ok(format!("{} {} on {square} cannot move", piece.color, piece.piece_type))
    } else {
        Ok(format!("{} {} on {square}: {}", piece.color, piece.piece_type, squares.join(" ")))
    }
}

fn play(board: &mut Board, from: &str, to: &str) -> anyhow::Result<()> {
    let piece = *board
        .piece_at_notation(from)?
        .with_context(|| format!("no piece on {from}"))?;
    let destination = Position::from_notation(to)?;

    if !piece.available_squares(board)?.contains(&destination) {
        anyhow::bail!("{} {} cannot reach {to}", piece.color, piece.piece_type);
    }

    let mv = board.move_piece(piece.id(), destination)?;
    if let Some(captured) = mv.captured {
        info!("captured {} {} on {to}", captured.color, captured.piece_type);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_rejects_unreachable_destination() {
        let mut board = Board::new();
        let before = board.to_string();

        let err = play(&mut board, "a1", "a5").unwrap_err();
        assert_eq!(err.to_string(), "white rook cannot reach a5");
        assert_eq!(board.to_string(), before);
        assert_eq!(board.piece_count(), 32);
    }

    #[test]
    fn play_needs_a_piece_on_the_origin() {
        let mut board = Board::new();
        let err = play(&mut board, "e4", "e5").unwrap_err();
        assert_eq!(err.to_string(), "no piece on e4");
        assert!(play(&mut board, "e2", "z9").is_err());
        assert_eq!(board.to_string(), Board::new().to_string());
    }

    #[test]
    fn play_commits_available_move() {
        let mut board = Board::new();
        play(&mut board, "g1", "f3").unwrap();
        assert!(board.piece_at_notation("g1").unwrap().is_none());
        let knight = board.piece_at_notation("f3").unwrap().unwrap();
        assert_eq!(knight.symbol(), 'N');
    }

    #[test]
    fn show_squares_lists_destinations() {
        let board = Board::new();
        assert_eq!(show_squares(&board, "b8").unwrap(), "black knight on b8: a6 c6");
        assert_eq!(show_squares(&board, "d1").unwrap(), "white queen on d1 cannot move");
        assert_eq!(show_squares(&board, "d4").unwrap_err().to_string(), "no piece on d4");
        assert!(show_squares(&board, "k2").is_err());
    }
}
