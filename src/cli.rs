use crate::color::ColorMode;

/// Scan command-line arguments for the `--color` convention:
///
/// - `--color`          forces basic ANSI colors
/// - `--color=none`     forces uncolored output
/// - `--color=auto`     colors only when stdout is a terminal
/// - `--color=ansi`     same as plain `--color`
/// - `--color=ansi256`  256-color output (where supported)
///
/// Arguments start at the program name, so index 0 is skipped. Unknown
/// values are ignored and the last recognized occurrence wins. Returns
/// `None` when no `--color` argument is present.
pub fn color_mode_from_args<S: AsRef<str>>(args: &[S]) -> Option<ColorMode> {
    let mut mode = None;
    for arg in args.iter().skip(1).map(|a| a.as_ref()) {
        if arg == "--color" {
            mode = Some(ColorMode::Ansi);
        } else if let Some(value) = arg.strip_prefix("--color=") {
            match value {
                "none" => mode = Some(ColorMode::None),
                "auto" => mode = Some(ColorMode::Auto),
                "ansi" => mode = Some(ColorMode::Ansi),
                "ansi256" => mode = Some(ColorMode::Ansi256),
                _ => {}
            }
        }
    }
    mode
}
