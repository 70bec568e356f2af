// src/lib.rs
pub mod cli;
pub mod color;
pub mod error;
pub mod level;
pub mod logger;
mod macros;
pub mod template;

pub use cli::color_mode_from_args;
pub use color::{Color, ColorMode, ColorPair, ColorSpec};
pub use error::LogError;
pub use level::Level;
pub use logger::{Logger, Record};
pub use template::{compile, Field, FieldColor, FieldKind, COMPACT_FORMAT, DEFAULT_FORMAT};
