//! Terminal colors (xterm-256 palette)

/// An xterm-256 color index
///
/// A newtype rather than an enum: several of the named colors share an
/// index (`PINK` and `BRIGHT_PURPLE` are both 201), which enum
/// discriminants cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8);

impl Color {
    pub const BLACK: Color = Color(0);
    pub const RED: Color = Color(1);
    pub const GREEN: Color = Color(2);
    pub const YELLOW: Color = Color(3);
    pub const BLUE: Color = Color(4);
    pub const MAGENTA: Color = Color(5);
    pub const CYAN: Color = Color(6);
    pub const WHITE: Color = Color(7);
    pub const BRIGHT_BLACK: Color = Color(8);
    pub const BRIGHT_RED: Color = Color(9);
    pub const BRIGHT_GREEN: Color = Color(10);
    pub const BRIGHT_YELLOW: Color = Color(11);
    pub const BRIGHT_BLUE: Color = Color(12);
    pub const BRIGHT_MAGENTA: Color = Color(13);
    pub const BRIGHT_CYAN: Color = Color(14);
    pub const BRIGHT_WHITE: Color = Color(15);
    pub const ORANGE: Color = Color(202);
    pub const BRIGHT_ORANGE: Color = Color(208);
    pub const PURPLE: Color = Color(93);
    pub const BRIGHT_PURPLE: Color = Color(201);
    pub const BROWN: Color = Color(130);
    pub const PINK: Color = Color(201);
    pub const BRIGHT_PINK: Color = Color(213);

    /// Look up a color by name, case-insensitively
    pub fn from_name(name: &str) -> Option<Color> {
        let color = match name.to_ascii_uppercase().as_str() {
            "BLACK" => Self::BLACK,
            "RED" => Self::RED,
            "GREEN" => Self::GREEN,
            "YELLOW" => Self::YELLOW,
            "BLUE" => Self::BLUE,
            "MAGENTA" => Self::MAGENTA,
            "CYAN" => Self::CYAN,
            "WHITE" => Self::WHITE,
            "BRIGHT_BLACK" => Self::BRIGHT_BLACK,
            "BRIGHT_RED" => Self::BRIGHT_RED,
            "BRIGHT_GREEN" => Self::BRIGHT_GREEN,
            "BRIGHT_YELLOW" => Self::BRIGHT_YELLOW,
            "BRIGHT_BLUE" => Self::BRIGHT_BLUE,
            "BRIGHT_MAGENTA" => Self::BRIGHT_MAGENTA,
            "BRIGHT_CYAN" => Self::BRIGHT_CYAN,
            "BRIGHT_WHITE" => Self::BRIGHT_WHITE,
            "ORANGE" => Self::ORANGE,
            "BRIGHT_ORANGE" => Self::BRIGHT_ORANGE,
            "PURPLE" => Self::PURPLE,
            "BRIGHT_PURPLE" => Self::BRIGHT_PURPLE,
            "BROWN" => Self::BROWN,
            "PINK" => Self::PINK,
            "BRIGHT_PINK" => Self::BRIGHT_PINK,
            _ => return None,
        };
        Some(color)
    }
}

/// Colors handed out to unseen names and tags, in first-sight order
pub(crate) const ASSIGNMENT_PALETTE: &[Color] = &[
    Color::BRIGHT_CYAN,
    Color::BRIGHT_YELLOW,
    Color::BRIGHT_GREEN,
    Color::BRIGHT_MAGENTA,
    Color::BRIGHT_BLUE,
    Color::ORANGE,
    Color::BRIGHT_PINK,
    Color::BRIGHT_RED,
    Color::PURPLE,
    Color::BRIGHT_WHITE,
    Color::BROWN,
    Color::BRIGHT_ORANGE,
];

/// Wrap text in 256-color foreground SGR codes
pub fn paint(text: &str, color: Color) -> String {
    format!("\x1b[38;5;{}m{}\x1b[0m", color.0, text)
}
