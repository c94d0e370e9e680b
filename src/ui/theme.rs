use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color,     // Grey
    pub node_border: Color, // Resting node outline
    pub cursor: Color,      // Blue
    pub mark: Color,        // Magenta
    pub access: Color,      // Yellow for get/set content
    pub fresh: Color,       // Green for appended/inserted/arrived nodes
    pub caption: Color,
    pub pane_border: Color,
    pub pane_title: Color,
    pub status_bg: Color,
    pub status_chip: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    node_border: Color::Rgb(147, 153, 178),
    cursor: Color::Rgb(137, 180, 250),  // Blue
    mark: Color::Rgb(245, 194, 231),    // Magenta
    access: Color::Rgb(249, 226, 175),  // Yellow
    fresh: Color::Rgb(166, 227, 161),   // Green
    caption: Color::Rgb(250, 179, 135), // Orange
    pane_border: Color::Rgb(108, 112, 134),
    pane_title: Color::Rgb(137, 180, 250),
    status_bg: Color::Rgb(50, 50, 70),
    status_chip: Color::Rgb(137, 180, 250),
};
