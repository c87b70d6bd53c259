use ratatui::style::Color;

/// Brand palette: neon cyan on near-black, with dimmed tiers for the
/// orbit depth cue.
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    pub accent: Color,
    pub selection: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x0a, 0x0a, 0x0f),
            bg1: Color::Rgb(0x12, 0x12, 0x1a),
            bg2: Color::Rgb(0x1e, 0x1e, 0x2a),
            fg0: Color::Rgb(0xe8, 0xe8, 0xf0),
            fg1: Color::Rgb(0xb8, 0xb8, 0xc4),
            grey0: Color::Rgb(0x55, 0x55, 0x66),
            grey1: Color::Rgb(0x7a, 0x7a, 0x8c),
            accent: Color::Rgb(0x00, 0xf3, 0xff),
            selection: Color::Rgb(0x1e, 0x2e, 0x34),
            error: Color::Rgb(0xea, 0x69, 0x62),
            success: Color::Rgb(0xa9, 0xb6, 0x65),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}

impl Theme {
    /// Pick a foreground tier for a given projected opacity.
    pub fn depth_fg(&self, opacity: f64) -> Color {
        if opacity >= 0.95 {
            self.accent
        } else if opacity >= 0.7 {
            self.fg0
        } else if opacity >= 0.5 {
            self.fg1
        } else {
            self.grey0
        }
    }
}
