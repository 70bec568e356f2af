use crate::error::LogError;
use is_terminal::IsTerminal;

/// The 16 symbolic ANSI terminal colors.
/// See https://en.wikipedia.org/wiki/ANSI_escape_code for the code values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    pub fn index(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[value(name = "auto", help = "Colors only when stdout is a terminal")]
    Auto,
    #[value(name = "none", help = "No color codes")]
    None,
    #[value(name = "ansi", help = "Basic 16-color ANSI codes")]
    Ansi,
    #[value(name = "ansi256", help = "256-color ANSI codes (where supported)")]
    Ansi256,
}

impl ColorMode {
    /// Turn `Auto` into a concrete mode. Colored output defaults to
    /// ANSI-256 and is only used when stdout is not being redirected.
    pub fn resolve(self) -> ColorMode {
        match self {
            ColorMode::Auto => {
                if std::io::stdout().is_terminal() {
                    ColorMode::Ansi256
                } else {
                    ColorMode::None
                }
            }
            other => other,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "none" => Ok(ColorMode::None),
            "ansi" => Ok(ColorMode::Ansi),
            "ansi256" => Ok(ColorMode::Ansi256),
            _ => Err(format!("Unknown color mode: {}", s)),
        }
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Auto
    }
}

/// One color slot carrying both palettes, so the same assignment works
/// under either color mode. `None` means no color in that palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorSpec {
    pub ansi: Option<Color>,
    pub ansi256: Option<u8>,
}

impl ColorSpec {
    pub const UNSET: ColorSpec = ColorSpec {
        ansi: None,
        ansi256: None,
    };

    pub const fn new(ansi: Color, ansi256: u8) -> ColorSpec {
        ColorSpec {
            ansi: Some(ansi),
            ansi256: Some(ansi256),
        }
    }
}

/// Foreground/background assignment for one field or level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: ColorSpec,
    pub bg: ColorSpec,
}

impl ColorPair {
    pub const UNSET: ColorPair = ColorPair {
        fg: ColorSpec::UNSET,
        bg: ColorSpec::UNSET,
    };

    pub const fn fg_only(ansi: Color, ansi256: u8) -> ColorPair {
        ColorPair {
            fg: ColorSpec::new(ansi, ansi256),
            bg: ColorSpec::UNSET,
        }
    }
}

/// Byte budget for one cached escape string: a combined foreground plus
/// background ANSI-256 sequence ("\x1B[38;5;255m\x1B[48;5;255m").
pub const CODE_BUDGET: usize = 22;

/// Generate the escape sequence for `pair` under `mode`, appending to an
/// empty string. A sequence that would not fit `budget` bytes is an
/// explicit error; nothing truncated is ever returned.
pub fn color_code(mode: ColorMode, pair: &ColorPair, budget: usize) -> Result<String, LogError> {
    let code = match mode {
        ColorMode::Ansi => ansi_code(pair),
        ColorMode::Ansi256 => ansi256_code(pair),
        _ => String::new(),
    };
    if code.len() > budget {
        return Err(LogError::CapacityExceeded {
            length: code.len(),
            budget,
        });
    }
    Ok(code)
}

fn ansi_code(pair: &ColorPair) -> String {
    let mut code = String::new();
    for (slot, base) in [(pair.fg.ansi, '3'), (pair.bg.ansi, '4')] {
        if let Some(color) = slot {
            let index = color.index();
            code.push('\x1b');
            code.push('[');
            code.push(base);
            if index < 8 {
                code.push((b'0' + index) as char);
                code.push('m');
            } else {
                // Bright color: fold the index back to 0-7 and add the
                // bold attribute.
                code.push((b'0' + index - 8) as char);
                code.push_str(";1m");
            }
        }
    }
    code
}

fn ansi256_code(pair: &ColorPair) -> String {
    let mut code = String::new();
    for (slot, prefix) in [(pair.fg.ansi256, "\x1b[38;5;"), (pair.bg.ansi256, "\x1b[48;5;")] {
        if let Some(index) = slot {
            code.push_str(prefix);
            code.push_str(&index.to_string());
            code.push('m');
        }
    }
    code
}

/// The reset sequence for `mode` (empty when colors are off).
pub fn reset_code(mode: ColorMode) -> &'static str {
    if mode == ColorMode::None {
        ""
    } else {
        "\x1b[0m"
    }
}
