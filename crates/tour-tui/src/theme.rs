use crossterm::style::Color;

/// Color theme for the animated board
#[derive(Debug, Clone)]
pub struct Theme {
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Column/row label color
    pub label: Color,
    /// Visited cell color
    pub visited: Color,
    /// Most recent move color
    pub current: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            label: Color::Rgb { r: 255, g: 210, b: 100 },
            visited: Color::Rgb { r: 80, g: 180, b: 255 },
            current: Color::Rgb { r: 90, g: 255, b: 130 },
        }
    }
}
