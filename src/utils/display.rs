//! Display and output formatting utilities
//!
//! Everything here is presentation. The viewport decides what part of the
//! plane is drawn; it never affects which cells live.

use crate::error::GolError;
use crate::game_of_life::{Grid, Position, Universe};
use serde::{Deserialize, Serialize};

/// Largest viewport side accepted from configuration
pub const MAX_VIEWPORT_SIDE: usize = 1000;

/// Rectangular window onto the plane, used only for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub top: i64,
    pub left: i64,
    pub height: usize,
    pub width: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { top: 0, left: 0, height: 40, width: 80 }
    }
}

impl Viewport {
    pub fn new(origin: Position, height: usize, width: usize) -> Self {
        Self { top: origin.row, left: origin.col, height, width }
    }

    /// Like `new`, but rejects an empty or oversized window
    pub fn try_new(origin: Position, height: usize, width: usize) -> Result<Self, GolError> {
        let side = 1..=MAX_VIEWPORT_SIDE;
        if !side.contains(&height) || !side.contains(&width) {
            return Err(GolError::InvalidViewport { height, width });
        }
        Ok(Self::new(origin, height, width))
    }

    /// Number of cells in the window, `None` if it does not fit in `usize`
    pub fn area(&self) -> Option<usize> {
        self.height.checked_mul(self.width)
    }

    /// Top-left corner
    pub fn origin(&self) -> Position {
        Position::new(self.top, self.left)
    }

    pub fn contains(&self, position: Position) -> bool {
        let row = position.row - self.top;
        let col = position.col - self.left;
        row >= 0 && col >= 0 && (row as u64) < self.height as u64 && (col as u64) < self.width as u64
    }

    /// A viewport of the same size centred on the grid's bounding box
    pub fn centered_on(&self, grid: &Grid) -> Self {
        match grid.bounding_box() {
            Some(bounds) => {
                let mid_row = bounds.min_row + (bounds.max_row - bounds.min_row) / 2;
                let mid_col = bounds.min_col + (bounds.max_col - bounds.min_col) / 2;
                Self {
                    top: mid_row - (self.height / 2) as i64,
                    left: mid_col - (self.width / 2) as i64,
                    ..*self
                }
            }
            None => *self,
        }
    }
}

/// Characters used to draw cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub live_char: char,
    pub dead_char: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self { live_char: '█', dead_char: ' ' }
    }
}

/// Format grids for display
pub struct GridFormatter;

impl GridFormatter {
    /// Draw the part of `grid` inside `viewport`, one line per row
    pub fn render(grid: &Grid, viewport: &Viewport, style: &RenderStyle) -> String {
        let mut output = String::with_capacity(viewport.height * (viewport.width + 1));
        for row in 0..viewport.height {
            for col in 0..viewport.width {
                let position = viewport.origin().offset(row as i64, col as i64);
                output.push(if grid.is_alive(position) { style.live_char } else { style.dead_char });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid's bounding box in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        match grid.bounding_box() {
            Some(bounds) => {
                let viewport = Viewport {
                    top: bounds.min_row,
                    left: bounds.min_col,
                    height: bounds.height() as usize,
                    width: bounds.width() as usize,
                };
                Self::render(grid, &viewport, &RenderStyle { live_char: '█', dead_char: '·' })
            }
            None => String::new(),
        }
    }

    /// Format the viewport with row and column numbers
    pub fn format_grid_with_coords(grid: &Grid, viewport: &Viewport) -> String {
        let mut output = String::new();

        output.push_str("     ");
        for col in 0..viewport.width {
            output.push_str(&format!("{:2}", (viewport.left + col as i64).rem_euclid(10)));
        }
        output.push('\n');

        for row in 0..viewport.height {
            let r = viewport.top + row as i64;
            output.push_str(&format!("{:4} ", r));
            for col in 0..viewport.width {
                let position = Position::new(r, viewport.left + col as i64);
                output.push_str(if grid.is_alive(position) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line summary of a running simulation
    pub fn status_line(universe: &Universe, viewport: &Viewport) -> String {
        let hidden = universe
            .grid()
            .live_positions()
            .filter(|&p| !viewport.contains(p))
            .count();
        let mut line = format!(
            "Generation: {}  Population: {}",
            universe.generation(),
            universe.population()
        );
        if hidden > 0 {
            line.push_str(&format!("  (off screen: {})", hidden));
        }
        line
    }

    /// Full frame for a terminal: clear, draw, status line
    pub fn frame(universe: &Universe, viewport: &Viewport, style: &RenderStyle) -> String {
        format!(
            "\x1b[2J\x1b[H{}{}\n",
            Self::render(universe.grid(), viewport, style),
            Self::status_line(universe, viewport)
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Blue => 34,
        }
    }
}
