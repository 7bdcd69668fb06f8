use std::io::{self, BufRead, Write};

use anyhow::Result;
use pegduo_core as game;

pub fn run() -> Result<()> {
    let mut board = game::SolitaireBoard::new();

    println!("Jump pegs over each other into empty holes; clear the board down to one peg.");
    println!(
        "Enter \"row col\" to pick a cell: a peg toggles selection, an empty hole attempts a jump. q quits."
    );
    render_board(&board);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();

        match line {
            "" => continue,
            "q" | "quit" | "exit" => return Ok(()),
            _ => {}
        }

        let Some(coords) = parse_coords(line, board.size()) else {
            println!("Enter two numbers between 0 and 6, e.g. \"1 3\".");
            continue;
        };

        act(&mut board, coords)?;
        render_board(&board);
        println!("{}", board.status());

        if board.peg_count() == 1 {
            println!("Solved! One peg left after {} moves.", board.turns_taken());
            return Ok(());
        }
        if !any_legal_jump(&board) {
            println!("No legal jumps remain. {} pegs left.", board.peg_count());
            return Ok(());
        }
    }
}

/// Mirrors the pointer-click contract of the board: a peg cell toggles
/// selection, an empty cell attempts a jump from the current selection.
fn act(board: &mut game::SolitaireBoard, coords: game::Coord2) -> Result<()> {
    match board.cell_at(coords) {
        game::BoardCell::Off => println!("That corner is off the board."),
        game::BoardCell::Peg => {
            if board.select_peg(coords)? == game::SelectOutcome::Cleared {
                println!("Selection cleared.");
            }
        }
        game::BoardCell::Empty => match board.jump_and_remove(coords)? {
            game::JumpOutcome::Removed(removed) => {
                println!("Captured the peg at ({}, {}).", removed.0, removed.1);
            }
            game::JumpOutcome::NoChange => {
                if board.selected_peg().is_none() {
                    println!("Select a peg first.");
                } else {
                    println!("Illegal jump: land two holes away over a neighboring peg.");
                }
            }
        },
    }
    Ok(())
}

/// The board models no terminal state, so probe every peg/landing pair.
fn any_legal_jump(board: &game::SolitaireBoard) -> bool {
    const JUMPS: [(i16, i16); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

    let (rows, cols) = board.size();
    for row in 0..rows {
        for col in 0..cols {
            if board.cell_at((row, col)) != game::BoardCell::Peg {
                continue;
            }
            for (row_delta, col_delta) in JUMPS {
                let landing_row = i16::from(row) + row_delta;
                let landing_col = i16::from(col) + col_delta;
                let (Ok(landing_row), Ok(landing_col)) =
                    (u8::try_from(landing_row), u8::try_from(landing_col))
                else {
                    continue;
                };
                if board
                    .legal_jump_between((row, col), (landing_row, landing_col))
                    .is_some()
                {
                    return true;
                }
            }
        }
    }
    false
}

fn parse_coords(line: &str, size: game::Coord2) -> Option<game::Coord2> {
    let mut tokens = line.split([' ', ',']).filter(|token| !token.is_empty());
    let row = tokens.next()?.parse::<u8>().ok()?;
    let col = tokens.next()?.parse::<u8>().ok()?;
    if tokens.next().is_some() || row >= size.0 || col >= size.1 {
        return None;
    }
    Some((row, col))
}

fn render_board(board: &game::SolitaireBoard) {
    let (rows, cols) = board.size();

    print!("   ");
    for col in 0..cols {
        print!(" {col}");
    }
    println!();

    for row in 0..rows {
        print!("  {row}");
        for col in 0..cols {
            let selected = board.selected_peg() == Some((row, col));
            print!(" {}", cell_glyph(board.cell_at((row, col)), selected));
        }
        println!();
    }
}

fn cell_glyph(cell: game::BoardCell, selected: bool) -> &'static str {
    match (cell, selected) {
        (game::BoardCell::Off, _) => "\x1b[90m#\x1b[0m",
        (game::BoardCell::Empty, _) => "\x1b[37m.\x1b[0m",
        (game::BoardCell::Peg, false) => "\x1b[34mo\x1b[0m",
        (game::BoardCell::Peg, true) => "\x1b[1;32m*\x1b[0m",
    }
}
