//! Half-block frame rendering.
//!
//! Two logical rows pack into one terminal row: each output character is the
//! upper half block, with the foreground color carrying the top cell and the
//! background color the bottom cell. The whole frame is buffered into one
//! string so a draw is a single write.

use crossterm::Command;
use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use life_core::Grid;

const GLYPH: char = '▀';
const ALIVE: Color = Color::Yellow;
const DEAD: Color = Color::Black;

fn cell_color(alive: bool) -> Color {
    if alive { ALIVE } else { DEAD }
}

/// Renders the grid into one frame string.
///
/// Pure function of the grid state: `height / 2` lines of `width` glyphs,
/// each prefixed with its two color directives, with a single trailing reset
/// so no styling leaks past the frame.
pub fn render(grid: &Grid) -> String {
    // Rough per-glyph cost of two color directives plus the block character.
    let mut frame = String::with_capacity(grid.width() * grid.height() * 12);
    for y in (0..grid.height()).step_by(2) {
        if y > 0 {
            frame.push_str("\r\n");
        }
        for x in 0..grid.width() {
            let top = grid.cell_state(x as i32, y as i32);
            let bottom = grid.cell_state(x as i32, y as i32 + 1);
            // Writing ANSI into a String cannot fail.
            let _ = SetForegroundColor(cell_color(top)).write_ansi(&mut frame);
            let _ = SetBackgroundColor(cell_color(bottom)).write_ansi(&mut frame);
            frame.push(GLYPH);
        }
    }
    let _ = ResetColor.write_ansi(&mut frame);
    frame
}
