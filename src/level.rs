/// Log severity levels. `All` and `Silent` exist only as filter endpoints
/// and are never valid levels for an actual log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    All = 0,
    Verbose,
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
    Silent,
}

/// Number of entries in per-level color tables (`All` through `Fatal`).
pub const LEVEL_TABLE_SIZE: usize = 7;

const LEVEL_NAMES: [&str; 8] = [
    "ALL", "VERBOSE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL", "SILENT",
];

const LEVEL_NAMES_SHORT: [&str; 8] = ["A", "V", "D", "I", "W", "E", "F", "S"];

impl Level {
    pub fn name(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    pub fn name_short(self) -> &'static str {
        LEVEL_NAMES_SHORT[self as usize]
    }

    /// Index into per-level color tables. `Silent` is rejected by the
    /// filter before any table lookup happens.
    pub(crate) fn table_index(self) -> usize {
        (self as usize).min(LEVEL_TABLE_SIZE - 1)
    }

    /// The levels a message can actually be logged at.
    pub fn loggable() -> impl Iterator<Item = Level> {
        [
            Level::Verbose,
            Level::Debug,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Fatal,
        ]
        .into_iter()
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(Level::All),
            "VERBOSE" => Ok(Level::Verbose),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "SILENT" => Ok(Level::Silent),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Verbose < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert!(Level::Fatal < Level::Silent);
        assert!(Level::All < Level::Verbose);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(Level::Warning.name(), "WARN");
        assert_eq!(Level::Info.name_short(), "I");
        assert_eq!(Level::Silent.name(), "SILENT");
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("info".parse::<Level>(), Ok(Level::Info));
        assert_eq!("WARN".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("warning".parse::<Level>(), Ok(Level::Warning));
        assert!("bogus".parse::<Level>().is_err());
    }

    #[test]
    fn test_loggable_excludes_sentinels() {
        let levels: Vec<Level> = Level::loggable().collect();
        assert_eq!(levels.len(), 6);
        assert!(!levels.contains(&Level::All));
        assert!(!levels.contains(&Level::Silent));
    }
}
