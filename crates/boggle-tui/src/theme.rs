use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Letter cell color
    pub letter: Color,
    /// Empty cell color
    pub empty: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Results header color
    pub header: Color,
    /// Error notification color
    pub error: Color,
    /// Status/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
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
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 110, g: 120, b: 150 },
            letter: Color::Rgb { r: 255, g: 255, b: 255 },
            empty: Color::Rgb { r: 90, g: 95, b: 115 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            header: Color::Rgb { r: 90, g: 255, b: 130 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }
}
