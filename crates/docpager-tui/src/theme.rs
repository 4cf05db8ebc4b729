use ratatui::style::Color;

/// Runtime color theme for the viewer
#[derive(Debug, Clone)]
pub struct Theme {
    // Page colors
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub faint: Color,

    // Navbar treatments
    pub navbar_bg_top: Color,
    pub navbar_bg_scrolled: Color,
    pub navbar_fg: Color,

    // Semantic colors
    pub accent: Color,
    pub heading: Color,
    pub link: Color,
    pub code_fg: Color,
    pub code_bg: Color,
    pub success: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Dark palette matching the documentation site's styling
        Self {
            bg: Color::Rgb(0x0a, 0x0a, 0x0f),
            fg: Color::Rgb(0xe0, 0xe0, 0xe8),
            dim: Color::Rgb(0xa0, 0xa0, 0xb0),
            faint: Color::Rgb(0x60, 0x60, 0x70),
            navbar_bg_top: Color::Rgb(0x14, 0x14, 0x1c),
            navbar_bg_scrolled: Color::Rgb(0x05, 0x05, 0x08),
            navbar_fg: Color::Rgb(0xe0, 0xe0, 0xe8),
            accent: Color::Rgb(0xff, 0x99, 0x00),
            heading: Color::Rgb(0xff, 0x99, 0x00),
            link: Color::Rgb(0x7d, 0xae, 0xe8),
            code_fg: Color::Rgb(0xd0, 0xd0, 0xd8),
            code_bg: Color::Rgb(0x16, 0x16, 0x20),
            success: Color::Rgb(0x4e, 0xc9, 0x6e),
            selection: Color::Rgb(0x2a, 0x2a, 0x3a),
        }
    }
}
