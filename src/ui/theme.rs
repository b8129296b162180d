use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub bar: Color,       // Resting bar color
    pub comparing: Color, // Bars under comparison
    pub swapping: Color,  // Bars being exchanged
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for edit focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),         // Slightly lighter BG for the status bar
    bar: Color::Rgb(137, 180, 250),            // Blue resting bars
    comparing: Color::Rgb(155, 135, 245),      // Purple comparison highlight
    swapping: Color::Rgb(234, 56, 76),         // Red swap highlight
};
