use crate::color::{self, Color, ColorMode, ColorPair, ColorSpec, CODE_BUDGET};
use crate::error::LogError;
use crate::level::{Level, LEVEL_TABLE_SIZE};
use crate::template::{self, Field, FieldColor, FieldKind};
use chrono::Local;
use std::io::{self, Write};

/// A formatted time longer than this is dropped rather than emitted.
const TIME_BUDGET: usize = 30;

/// Caller-supplied filter; replaces threshold filtering while set.
pub type FilterFn = Box<dyn Fn(Level, Option<&str>) -> bool>;

/// One log call. The `file`/`line` slots are filled by the `log_*!`
/// macros; plain method calls leave them empty.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub tag: Option<&'a str>,
    pub file: Option<&'a str>,
    pub line: u32,
    pub message: &'a str,
}

/// Per-level color assignments plus the escape strings precomputed for
/// the active color mode, so emitting does lookups only.
struct ColorTable {
    label: [ColorPair; LEVEL_TABLE_SIZE],
    message: [ColorPair; LEVEL_TABLE_SIZE],
    label_code: [String; LEVEL_TABLE_SIZE],
    message_code: [String; LEVEL_TABLE_SIZE],
}

impl ColorTable {
    fn with_defaults() -> ColorTable {
        let mut label = [ColorPair::UNSET; LEVEL_TABLE_SIZE];
        let mut message = [ColorPair::UNSET; LEVEL_TABLE_SIZE];

        label[Level::Verbose.table_index()] = ColorPair::fg_only(Color::BrightCyan, 45);
        label[Level::Debug.table_index()] = ColorPair::fg_only(Color::BrightCyan, 45);
        label[Level::Info.table_index()] = ColorPair::fg_only(Color::BrightGreen, 40);
        label[Level::Warning.table_index()] = ColorPair::fg_only(Color::BrightYellow, 220);
        label[Level::Error.table_index()] = ColorPair::fg_only(Color::BrightRed, 160);
        label[Level::Fatal.table_index()] = ColorPair {
            fg: ColorSpec::new(Color::BrightRed, 255),
            bg: ColorSpec {
                ansi: None,
                ansi256: Some(160),
            },
        };

        message[Level::Verbose.table_index()] = ColorPair {
            fg: ColorSpec {
                ansi: None,
                ansi256: Some(240),
            },
            bg: ColorSpec::UNSET,
        };
        message[Level::Debug.table_index()] = message[Level::Verbose.table_index()];
        message[Level::Warning.table_index()] = ColorPair::fg_only(Color::BrightYellow, 220);
        message[Level::Error.table_index()] = ColorPair::fg_only(Color::BrightRed, 160);
        message[Level::Fatal.table_index()] = ColorPair {
            fg: ColorSpec::new(Color::BrightRed, 255),
            bg: ColorSpec {
                ansi: None,
                ansi256: Some(160),
            },
        };

        ColorTable {
            label,
            message,
            label_code: std::array::from_fn(|_| String::new()),
            message_code: std::array::from_fn(|_| String::new()),
        }
    }

    /// Regenerate every cached escape string for `mode`. A pair whose
    /// code exceeds the budget degrades to no color.
    fn rebuild(&mut self, mode: ColorMode) {
        for i in 0..LEVEL_TABLE_SIZE {
            self.label_code[i] =
                color::color_code(mode, &self.label[i], CODE_BUDGET).unwrap_or_default();
            self.message_code[i] =
                color::color_code(mode, &self.message[i], CODE_BUDGET).unwrap_or_default();
        }
    }
}

/// Log line formatter and emitter. Owns its compiled field list, color
/// table, and output writer; there is no process-global state. A
/// `Logger` is a plain mutable value with no internal locking, so
/// sharing one across threads needs an external lock.
pub struct Logger {
    fields: Vec<Field>,
    /// Cached escape strings for fields with explicit colors, parallel
    /// to `fields`.
    field_codes: Vec<String>,
    colors: ColorTable,
    mode: ColorMode,
    filter: Level,
    filter_fn: Option<FilterFn>,
    out: Box<dyn Write>,
}

impl Logger {
    /// Logger writing to stdout with the default format, auto-detected
    /// color mode, and no filtering.
    pub fn new() -> Logger {
        Logger::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write>) -> Logger {
        let mut logger = Logger {
            fields: Vec::new(),
            field_codes: Vec::new(),
            colors: ColorTable::with_defaults(),
            mode: ColorMode::Auto.resolve(),
            filter: Level::All,
            filter_fn: None,
            out,
        };
        logger.colors.rebuild(logger.mode);
        logger.set_format(template::DEFAULT_FORMAT);
        logger
    }

    /// Recompile the field list from a template. Eager: the field color
    /// cache is refreshed immediately.
    pub fn set_format(&mut self, format: &str) {
        self.fields = template::compile(format);
        self.rebuild_field_codes();
    }

    /// Set the color mode. `Auto` resolves against stdout here; caches
    /// are refreshed only when the resolved mode actually changes.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        let resolved = mode.resolve();
        if resolved != self.mode {
            self.mode = resolved;
            self.colors.rebuild(self.mode);
            self.rebuild_field_codes();
        }
    }

    /// The active (resolved) color mode, never `Auto`.
    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    pub fn set_level_filter(&mut self, filter: Level) {
        self.filter = filter;
    }

    pub fn level_filter(&self) -> Level {
        self.filter
    }

    /// Install a filter callback. While set it fully replaces threshold
    /// filtering.
    pub fn set_filter(&mut self, filter: impl Fn(Level, Option<&str>) -> bool + 'static) {
        self.filter_fn = Some(Box::new(filter));
    }

    pub fn clear_filter(&mut self) {
        self.filter_fn = None;
    }

    /// Assign the label color for one level. Sentinel levels are
    /// ignored. The level cache is refreshed immediately.
    pub fn set_label_color(&mut self, level: Level, pair: ColorPair) {
        if level > Level::All && level < Level::Silent {
            self.colors.label[level.table_index()] = pair;
            self.colors.rebuild(self.mode);
        }
    }

    /// Assign the message color for one level. Sentinel levels are
    /// ignored.
    pub fn set_message_color(&mut self, level: Level, pair: ColorPair) {
        if level > Level::All && level < Level::Silent {
            self.colors.message[level.table_index()] = pair;
            self.colors.rebuild(self.mode);
        }
    }

    pub fn log(&mut self, level: Level, tag: &str, message: &str) -> Result<(), LogError> {
        self.log_record(&Record {
            level,
            tag: Some(tag),
            file: None,
            line: 0,
            message,
        })
    }

    pub fn verbose(&mut self, tag: &str, message: &str) -> Result<(), LogError> {
        self.log(Level::Verbose, tag, message)
    }

    pub fn debug(&mut self, tag: &str, message: &str) -> Result<(), LogError> {
        self.log(Level::Debug, tag, message)
    }

    pub fn info(&mut self, tag: &str, message: &str) -> Result<(), LogError> {
        self.log(Level::Info, tag, message)
    }

    pub fn warning(&mut self, tag: &str, message: &str) -> Result<(), LogError> {
        self.log(Level::Warning, tag, message)
    }

    pub fn error(&mut self, tag: &str, message: &str) -> Result<(), LogError> {
        self.log(Level::Error, tag, message)
    }

    pub fn fatal(&mut self, tag: &str, message: &str) -> Result<(), LogError> {
        self.log(Level::Fatal, tag, message)
    }

    /// Format and write one record. Formatting itself is best-effort;
    /// only writer failures surface.
    pub fn log_record(&mut self, record: &Record) -> Result<(), LogError> {
        let Some(line) = self.render(record) else {
            return Ok(());
        };
        self.out.write_all(line.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Render a record into its output line, or `None` when the record
    /// is filtered out.
    pub fn render(&self, record: &Record) -> Option<String> {
        if !self.passes_filter(record.level, record.tag) {
            return None;
        }

        let mut line = String::new();
        // Visible characters written so far; color codes don't count.
        let mut printed = 0usize;

        for (i, field) in self.fields.iter().enumerate() {
            if field.pad_to > 0 && printed < field.pad_to {
                let padding = field.pad_to - printed;
                line.extend(std::iter::repeat(' ').take(padding));
                printed += padding;
            }

            let code = match field.color {
                FieldColor::Explicit(_) => self.field_codes[i].as_str(),
                FieldColor::LevelLabel => self.colors.label_code[record.level.table_index()].as_str(),
                FieldColor::LevelMessage => {
                    self.colors.message_code[record.level.table_index()].as_str()
                }
                FieldColor::None => "",
            };
            if !code.is_empty() {
                line.push_str(code);
            }

            printed += self.render_content(&mut line, field, record);

            if !code.is_empty() {
                line.push_str(color::reset_code(self.mode));
            }

            if !field.trailing.is_empty() {
                line.push_str(&field.trailing);
                printed += field.trailing.chars().count();
            }
        }

        if !record.message.ends_with('\n') {
            line.push('\n');
        }
        Some(line)
    }

    /// Emit one field's content, returning its visible character count.
    fn render_content(&self, line: &mut String, field: &Field, record: &Record) -> usize {
        let start = line.len();
        match field.kind {
            FieldKind::Time => {
                if let Some(pattern) = field.time_pattern {
                    let time = Local::now().format(pattern).to_string();
                    // Drop the field entirely rather than emit a
                    // truncated time.
                    if !time.is_empty() && time.len() < TIME_BUDGET {
                        line.push_str(&time);
                    }
                }
            }
            FieldKind::LevelName => line.push_str(record.level.name()),
            FieldKind::LevelShort => line.push_str(record.level.name_short()),
            FieldKind::Tag => {
                if let Some(tag) = record.tag {
                    line.push_str(tag);
                }
            }
            FieldKind::File => {
                if let Some(file) = record.file {
                    line.push_str(file);
                    line.push(':');
                    line.push_str(&record.line.to_string());
                }
            }
            FieldKind::FileShort => {
                if let Some(file) = record.file {
                    line.push_str(short_filename(file));
                    line.push(':');
                    line.push_str(&record.line.to_string());
                }
            }
            FieldKind::Message => line.push_str(record.message),
            FieldKind::Padding => {}
        }
        line[start..].chars().count()
    }

    fn passes_filter(&self, level: Level, tag: Option<&str>) -> bool {
        if let Some(filter_fn) = &self.filter_fn {
            return filter_fn(level, tag);
        }
        level >= self.filter && level < Level::Silent
    }

    fn rebuild_field_codes(&mut self) {
        self.field_codes = self
            .fields
            .iter()
            .map(|field| match field.color {
                FieldColor::Explicit(pair) => {
                    color::color_code(self.mode, &pair, CODE_BUDGET).unwrap_or_default()
                }
                _ => String::new(),
            })
            .collect();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new()
    }
}

fn short_filename(file: &str) -> &str {
    file.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(file)
}
