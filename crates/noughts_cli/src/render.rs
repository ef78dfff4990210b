//! Pure display routines: engine state in, strings out.
//!
//! Nothing here touches stdout or holds state; the driver decides when to
//! print.

use noughts_engine::{Board, Cell, Mark, MoveError};

const HLINE: &str = "   +---+---+---+";

/// Renders the framed grid with A-C column headers and a 0-2 row gutter.
///
/// Empty cells render as blanks.
pub fn board_grid(board: &Board) -> String {
    let mut lines = vec!["     A   B   C".to_string(), HLINE.to_string()];
    for (index, row) in board.rows().into_iter().enumerate() {
        let [a, b, c] = row.map(cell_glyph);
        lines.push(format!("{index}  | {a} | {b} | {c} |"));
        lines.push(HLINE.to_string());
    }
    lines.join("\n")
}

fn cell_glyph(cell: Cell) -> char {
    match cell.mark() {
        None => ' ',
        Some(Mark::O) => 'O',
        Some(Mark::X) => 'X',
    }
}

/// The announcement made once after setup.
pub fn first_mover(mover: Mark, randomly_selected: bool) -> String {
    if randomly_selected {
        format!("{mover} moves first (randomly selected)")
    } else {
        format!("{mover} moves first")
    }
}

/// The per-turn prompt naming the active mover.
pub fn move_prompt(mover: Mark) -> String {
    format!(
        "\nMake your move, player {mover}!\n\
         Type the coordinates (e.g. A0) of the square in\n\
         which you would like to place a marker:\n..."
    )
}

/// The retry message for a rejected move.
pub fn rejected(error: &MoveError) -> String {
    match error {
        MoveError::InvalidFormat(_) => {
            format!("{error}.\nCoordinates look like A0 or B1 (case insensitive).")
        }
        MoveError::CellOccupied(_) => format!("{error}. Pick an empty square."),
        MoveError::GameOver => error.to_string(),
    }
}

/// The win announcement.
pub fn won(mark: Mark) -> String {
    format!("Congratulations, {mark}! You have won!")
}

/// The draw announcement.
pub fn draw() -> String {
    "Draw".to_string()
}
