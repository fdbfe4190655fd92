use crossterm::style::Color;

/// Color roles for the grid printer.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Given (puzzle) cells.
    pub given: Color,
    /// Player-entered values with no conflict.
    pub player: Color,
    /// Player-entered values duplicating a peer.
    pub error: Color,
    /// Grid separators between 3x3 boxes.
    pub border: Color,
    /// Headings and prompts.
    pub info: Color,
    /// Completion message.
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Default theme for dark terminals.
    pub fn dark() -> Self {
        Self {
            given: Color::White,
            player: Color::Yellow,
            error: Color::Red,
            border: Color::DarkGrey,
            info: Color::Grey,
            success: Color::Green,
        }
    }

    /// Theme for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            given: Color::Black,
            player: Color::DarkYellow,
            error: Color::DarkRed,
            border: Color::Grey,
            info: Color::DarkGrey,
            success: Color::DarkGreen,
        }
    }
}
