/// Log with call-site capture so `{file}`/`{file_short}` fields have
/// content. Output is best-effort; writer errors are swallowed, matching
/// the fail-soft behavior of the rest of the formatter.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)*) => {{
        let _ = $logger.log_record(&$crate::Record {
            level: $level,
            tag: Some($tag),
            file: Some(file!()),
            line: line!(),
            message: &format!($($arg)*),
        });
    }};
}

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Verbose, $tag, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Debug, $tag, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Info, $tag, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Warning, $tag, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Error, $tag, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Fatal, $tag, $($arg)*)
    };
}
