use std::fmt;

/// One dispatched command. An empty `name` marks a line that was handed to
/// the external fallback, in which case `args` holds the whole raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub name: String,
    pub args: String,
}

impl HistoryEntry {
    pub fn builtin(name: &str, args: &str) -> Self {
        HistoryEntry {
            name: name.to_string(),
            args: args.to_string(),
        }
    }

    pub fn external(line: &str) -> Self {
        HistoryEntry {
            name: String::new(),
            args: line.to_string(),
        }
    }

    pub fn is_external(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name.is_empty(), self.args.is_empty()) {
            (true, _) => write!(f, "{}", self.args),
            (false, true) => write!(f, "{}", self.name),
            (false, false) => write!(f, "{} {}", self.name, self.args),
        }
    }
}

/// Append-only, in-memory record of every dispatched command for the
/// lifetime of the session.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numbered display lines, 1-based, in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{:>4}  {}", i + 1, entry))
    }
}
