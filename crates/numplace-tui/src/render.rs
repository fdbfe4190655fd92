use crossterm::style::Stylize;
use numplace_core::{CellView, PlaySession, SIZE};
use std::io::{self, Write};

use crate::theme::Theme;

/// Print the current grid. Givens in the theme's given color, player
/// entries highlighted, conflicting entries in the error color, empty
/// cells as `_`, with `-`/`|` separators between boxes.
pub fn draw(out: &mut impl Write, session: &PlaySession, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}", "Puzzle:".with(theme.info))?;
    for row in 0..SIZE {
        if row != 0 && row % 3 == 0 {
            writeln!(out, "{}", "-----------------------".with(theme.border))?;
        }
        for col in 0..SIZE {
            if col != 0 && col % 3 == 0 {
                write!(out, "{}", "| ".with(theme.border))?;
            }
            let value = session.current().get(row, col);
            match session.cell_view(row, col) {
                CellView::Empty => write!(out, "_ ")?,
                CellView::Given => {
                    write!(out, "{} ", value.to_string().with(theme.given))?
                }
                CellView::Player => {
                    write!(out, "{} ", value.to_string().with(theme.player).bold())?
                }
                CellView::PlayerError => {
                    write!(out, "{} ", value.to_string().with(theme.error).bold())?
                }
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print the completion banner.
pub fn congratulate(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Congratulations! You solved the puzzle!"
            .with(theme.success)
            .bold()
    )
}
