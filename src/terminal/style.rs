//! SGR style tokens and the pure text-wrapping helper.
//!
//! Styling is completely stateless: [`style`] brackets a string with SGR
//! start codes and a single reset, and never talks to the writer. The
//! result is safe to pass as line content, since SGR sequences do not
//! move the cursor.

/// The escape sequence that resets all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// An SGR (Select Graphic Rendition) style token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Bold or increased intensity.
    Bold,
    /// Dim or decreased intensity.
    Dim,
    /// Underlined text.
    Underline,
    /// Blinking text.
    Blink,
    /// Swap foreground and background colors.
    Reverse,
    /// Concealed text.
    Hidden,
    /// Terminal default foreground color.
    Default,
    /// Black foreground.
    Black,
    /// Red foreground.
    Red,
    /// Green foreground.
    Green,
    /// Yellow foreground.
    Yellow,
    /// Blue foreground.
    Blue,
    /// Magenta foreground.
    Magenta,
    /// Cyan foreground.
    Cyan,
    /// Light gray foreground.
    LightGray,
    /// Dark gray foreground.
    DarkGray,
    /// Light red foreground.
    LightRed,
    /// Light green foreground.
    LightGreen,
    /// Light yellow foreground.
    LightYellow,
    /// Light blue foreground.
    LightBlue,
    /// Light magenta foreground.
    LightMagenta,
    /// Light cyan foreground.
    LightCyan,
    /// White foreground.
    White,
    /// Terminal default background color.
    BgDefault,
    /// Black background.
    BgBlack,
    /// Red background.
    BgRed,
    /// Green background.
    BgGreen,
    /// Yellow background.
    BgYellow,
    /// Blue background.
    BgBlue,
    /// Magenta background.
    BgMagenta,
    /// Cyan background.
    BgCyan,
    /// Light gray background.
    BgLightGray,
    /// Dark gray background.
    BgDarkGray,
    /// Light red background.
    BgLightRed,
    /// Light green background.
    BgLightGreen,
    /// Light yellow background.
    BgLightYellow,
    /// Light blue background.
    BgLightBlue,
    /// Light magenta background.
    BgLightMagenta,
    /// Light cyan background.
    BgLightCyan,
    /// White background.
    BgWhite,
}

impl Style {
    /// The escape sequence that enables this style.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1b[1m",
            Self::Dim => "\x1b[2m",
            Self::Underline => "\x1b[4m",
            Self::Blink => "\x1b[5m",
            Self::Reverse => "\x1b[7m",
            Self::Hidden => "\x1b[8m",
            Self::Default => "\x1b[39m",
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::LightGray => "\x1b[37m",
            Self::DarkGray => "\x1b[90m",
            Self::LightRed => "\x1b[91m",
            Self::LightGreen => "\x1b[92m",
            Self::LightYellow => "\x1b[93m",
            Self::LightBlue => "\x1b[94m",
            Self::LightMagenta => "\x1b[95m",
            Self::LightCyan => "\x1b[96m",
            Self::White => "\x1b[97m",
            Self::BgDefault => "\x1b[49m",
            Self::BgBlack => "\x1b[40m",
            Self::BgRed => "\x1b[41m",
            Self::BgGreen => "\x1b[42m",
            Self::BgYellow => "\x1b[43m",
            Self::BgBlue => "\x1b[44m",
            Self::BgMagenta => "\x1b[45m",
            Self::BgCyan => "\x1b[46m",
            Self::BgLightGray => "\x1b[47m",
            Self::BgDarkGray => "\x1b[100m",
            Self::BgLightRed => "\x1b[101m",
            Self::BgLightGreen => "\x1b[102m",
            Self::BgLightYellow => "\x1b[103m",
            Self::BgLightBlue => "\x1b[104m",
            Self::BgLightMagenta => "\x1b[105m",
            Self::BgLightCyan => "\x1b[106m",
            Self::BgWhite => "\x1b[107m",
        }
    }
}

/// Bracket `text` with the given styles and a single reset.
pub fn style(styles: &[Style], text: &str) -> String {
    let mut out = String::with_capacity(styles.len() * 5 + text.len() + RESET.len());
    for s in styles {
        out.push_str(s.code());
    }
    out.push_str(text);
    out.push_str(RESET);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_style() {
        assert_eq!(style(&[Style::Green], "ok"), "\x1b[32mok\x1b[0m");
    }

    #[test]
    fn test_stacked_styles() {
        assert_eq!(
            style(&[Style::Green, Style::Bold], "ok"),
            "\x1b[32m\x1b[1mok\x1b[0m"
        );
    }

    #[test]
    fn test_no_styles_still_resets() {
        assert_eq!(style(&[], "plain"), "plain\x1b[0m");
    }
}
