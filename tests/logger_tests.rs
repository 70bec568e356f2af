// tests/logger_tests.rs - End-to-end checks of the public formatting API
use std::io::Write;
use std::sync::{Arc, Mutex};
use taglog::{compile, ColorMode, FieldKind, Level, Logger, Record};

/// Writer handle that keeps the captured bytes readable after the
/// logger takes ownership of its clone.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture_logger(format: &str) -> (Logger, SharedBuf) {
    let buf = SharedBuf::default();
    let mut logger = Logger::with_writer(Box::new(buf.clone()));
    logger.set_color_mode(ColorMode::None);
    logger.set_format(format);
    (logger, buf)
}

fn sample_record(level: Level) -> Record<'static> {
    Record {
        level,
        tag: Some("net"),
        file: Some("src/session.rs"),
        line: 7,
        message: "hi",
    }
}

#[test]
fn test_every_placeholder_compiles_to_one_field() {
    for (name, kind) in [
        ("message", FieldKind::Message),
        ("time", FieldKind::Time),
        ("time_short", FieldKind::Time),
        ("level", FieldKind::LevelName),
        ("level_short", FieldKind::LevelShort),
        ("tag", FieldKind::Tag),
        ("file", FieldKind::File),
        ("file_short", FieldKind::FileShort),
    ] {
        let fields = compile(&format!("{{{}}}", name));
        assert_eq!(fields.len(), 1, "placeholder {}", name);
        assert_eq!(fields[0].kind, kind, "placeholder {}", name);
    }
}

#[test]
fn test_unknown_placeholders_do_not_abort_compilation() {
    let fields = compile("{nope} {level} {also_nope} {message}");
    let kinds: Vec<FieldKind> = fields.iter().map(|f| f.kind).collect();
    assert!(kinds.contains(&FieldKind::LevelName));
    assert!(kinds.contains(&FieldKind::Message));
    assert!(!kinds
        .iter()
        .any(|k| matches!(k, FieldKind::Tag | FieldKind::File)));
}

#[test]
fn test_spec_scenario_writes_through() {
    let (mut logger, buf) = capture_logger("{level_short} {message}");
    logger.info("net", "hi").unwrap();
    assert_eq!(buf.contents(), "I hi\n");
}

#[test]
fn test_filtered_levels_write_nothing() {
    let (mut logger, buf) = capture_logger("{message}");
    logger.set_level_filter(Level::Error);
    logger.verbose("t", "v").unwrap();
    logger.debug("t", "d").unwrap();
    logger.info("t", "i").unwrap();
    logger.warning("t", "w").unwrap();
    assert_eq!(buf.contents(), "");

    logger.error("t", "e").unwrap();
    logger.fatal("t", "f").unwrap();
    assert_eq!(buf.contents(), "e\nf\n");
}

#[test]
fn test_color_mode_none_never_escapes() {
    let (logger, _) = capture_logger("{time} {level} {level_short} {tag} {file} {message}");
    for level in Level::loggable() {
        let line = logger.render(&sample_record(level)).unwrap();
        assert!(
            !line.contains('\x1b'),
            "escape code at level {}: {:?}",
            level,
            line
        );
    }
}

#[test]
fn test_label_color_round_trip_is_stable() {
    let (mut logger, _) = capture_logger("{level} {message}");
    logger.set_color_mode(ColorMode::Ansi256);
    let first = logger.render(&sample_record(Level::Error)).unwrap();

    // Reassigning the same color and mode must regenerate identical
    // escape strings.
    logger.set_label_color(
        Level::Error,
        taglog::ColorPair::fg_only(taglog::Color::BrightRed, 160),
    );
    logger.set_color_mode(ColorMode::Ansi256);
    let second = logger.render(&sample_record(Level::Error)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_default_format_full_line() {
    let (logger, _) = capture_logger(taglog::DEFAULT_FORMAT);
    let line = logger.render(&sample_record(Level::Warning)).unwrap();
    assert!(line.contains("W "), "line: {:?}", line);
    assert!(line.contains("net"));
    assert!(line.contains("session.rs:7"));
    assert!(!line.contains("src/"));
    assert!(line.ends_with("hi\n"));
}

#[test]
fn test_macro_captures_call_site() {
    let (mut logger, buf) = capture_logger("{file_short} {message}");
    taglog::log_info!(&mut logger, "t", "n={}", 3);
    let output = buf.contents();
    assert!(output.contains("logger_tests.rs:"), "output: {:?}", output);
    assert!(output.ends_with("n=3\n"));
}

#[test]
fn test_macro_respects_filter() {
    let (mut logger, buf) = capture_logger("{message}");
    logger.set_level_filter(Level::Silent);
    taglog::log_fatal!(&mut logger, "t", "nope");
    assert_eq!(buf.contents(), "");
}

#[test]
fn test_format_switch_is_eager() {
    let (mut logger, buf) = capture_logger("{level_short} {message}");
    logger.info("t", "one").unwrap();
    logger.set_format("{message}");
    logger.info("t", "two").unwrap();
    assert_eq!(buf.contents(), "I one\ntwo\n");
}
