use crate::color::{Color, ColorPair};

/// Default log line template compiled by a fresh `Logger`.
pub const DEFAULT_FORMAT: &str = "{time_short} {level_short} {tag} {file_short} {message}";

/// Compact variant without tag and source location.
pub const COMPACT_FORMAT: &str = "{time_short} {level_short} {message}";

/// Compiled templates hold at most this many fields; extra fields are
/// silently dropped.
pub const MAX_FIELD_COUNT: usize = 10;

/// Byte budget for literal text attached after a field.
pub const TRAILING_LITERAL_BUDGET: usize = 5;

const TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
const TIME_PATTERN_SHORT: &str = "%H:%M:%S";

const TAG_COLOR: ColorPair = ColorPair::fg_only(Color::Cyan, 30);
const FILE_COLOR: ColorPair = ColorPair::fg_only(Color::BrightBlue, 68);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// No content of its own; exists for column padding and literal text.
    Padding,
    Time,
    LevelName,
    LevelShort,
    File,
    FileShort,
    Tag,
    Message,
}

/// How a field picks its color at emit time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldColor {
    None,
    /// Fixed color independent of the log level.
    Explicit(ColorPair),
    /// The label color of the call's level.
    LevelLabel,
    /// The message color of the call's level.
    LevelMessage,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub kind: FieldKind,
    /// strftime-style pattern for `Time` fields.
    pub time_pattern: Option<&'static str>,
    /// Pad with spaces up to this column before emitting content.
    pub pad_to: usize,
    /// Literal text emitted directly after the field content.
    pub trailing: String,
    pub color: FieldColor,
}

impl Field {
    fn new(kind: FieldKind) -> Field {
        Field {
            kind,
            time_pattern: None,
            pad_to: 0,
            trailing: String::new(),
            color: FieldColor::None,
        }
    }
}

/// Compile a template string into an ordered field list.
///
/// The template is literal text mixed with `{name}` placeholders.
/// Recognized names: `message`, `time`, `time_short`, `level`,
/// `level_short`, `tag`, `file`, `file_short`, and bare integers that pad
/// the line out to a column. Unknown placeholders compile to nothing, an
/// unterminated placeholder ends compilation.
pub fn compile(template: &str) -> Vec<Field> {
    let mut fields: Vec<Field> = Vec::new();
    // Index of the field that receives literal text found next.
    let mut attach: Option<usize> = None;
    let mut rest = template;

    while !rest.is_empty() {
        if !rest.starts_with('{') {
            // Literal run: carried by empty padding fields, up to the
            // trailing budget each.
            if fields.len() < MAX_FIELD_COUNT {
                fields.push(Field::new(FieldKind::Padding));
                attach = Some(fields.len() - 1);
            } else {
                attach = None;
            }
            rest = consume_literal(rest, attach, &mut fields);
            continue;
        }

        let Some(end) = rest.find('}') else {
            break;
        };
        let name = &rest[1..end];
        rest = &rest[end + 1..];

        if let Some(field) = field_for_name(name) {
            if fields.len() < MAX_FIELD_COUNT {
                fields.push(field);
                attach = Some(fields.len() - 1);
            } else {
                attach = None;
            }
        }
        // Unknown names keep the previous attach target, so following
        // literal text replaces that field's trailing.
        if let Some(idx) = attach {
            if literal_len(rest) > 0 {
                fields[idx].trailing.clear();
            }
        }
        rest = consume_literal(rest, attach, &mut fields);
    }

    fields
}

fn field_for_name(name: &str) -> Option<Field> {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        let digits: &str = &name[..name
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(name.len())];
        let padding: usize = digits.parse().unwrap_or(0);
        if padding > 0 {
            let mut field = Field::new(FieldKind::Padding);
            field.pad_to = padding;
            return Some(field);
        }
        return None;
    }

    let field = match name {
        "message" => {
            let mut f = Field::new(FieldKind::Message);
            f.color = FieldColor::LevelMessage;
            f
        }
        "time" => {
            let mut f = Field::new(FieldKind::Time);
            f.time_pattern = Some(TIME_PATTERN);
            f
        }
        "time_short" => {
            let mut f = Field::new(FieldKind::Time);
            f.time_pattern = Some(TIME_PATTERN_SHORT);
            f
        }
        "level" => {
            let mut f = Field::new(FieldKind::LevelName);
            f.color = FieldColor::LevelLabel;
            f
        }
        "level_short" => {
            let mut f = Field::new(FieldKind::LevelShort);
            f.color = FieldColor::LevelLabel;
            f
        }
        "tag" => {
            let mut f = Field::new(FieldKind::Tag);
            f.color = FieldColor::Explicit(TAG_COLOR);
            f
        }
        "file" => {
            let mut f = Field::new(FieldKind::File);
            f.color = FieldColor::Explicit(FILE_COLOR);
            f
        }
        "file_short" => {
            let mut f = Field::new(FieldKind::FileShort);
            f.color = FieldColor::Explicit(FILE_COLOR);
            f
        }
        _ => return None,
    };
    Some(field)
}

fn literal_len(rest: &str) -> usize {
    rest.find('{').unwrap_or(rest.len())
}

/// Consume literal characters into the attach target's trailing text, up
/// to the budget, stopping at the next placeholder. Leftover literal is
/// left for the caller to chunk into further padding fields.
fn consume_literal<'a>(rest: &'a str, attach: Option<usize>, fields: &mut [Field]) -> &'a str {
    let mut consumed = 0;
    match attach {
        Some(idx) => {
            let trailing = &mut fields[idx].trailing;
            for c in rest.chars() {
                if c == '{' || trailing.len() + c.len_utf8() > TRAILING_LITERAL_BUDGET {
                    break;
                }
                trailing.push(c);
                consumed += c.len_utf8();
            }
        }
        None => {
            // Field cap reached: drop one literal character and retry, so
            // placeholders past the cap still get parsed (and dropped).
            if let Some(c) = rest.chars().next() {
                if c != '{' {
                    consumed = c.len_utf8();
                }
            }
        }
    }
    &rest[consumed..]
}
