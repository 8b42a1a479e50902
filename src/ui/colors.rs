use crossterm::style::Color;

// Page palette, 256-color ANSI values
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn heading_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn column_header_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn total_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

/// Extracts the ANSI code from a crossterm color, with a fallback for non-ANSI colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}
