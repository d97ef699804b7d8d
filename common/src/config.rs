/// Names greeted after the default greeting when none are given.
pub const DEFAULT_ROSTER: [&str; 3] = ["Alice", "Bob", "Charlie"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Names to greet, in order, after the default greeting.
    ///
    /// Entries are used verbatim. An empty entry is still greeted.
    pub roster: Vec<String>,
}

impl Config {
    pub fn with_roster<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roster: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_roster(DEFAULT_ROSTER)
    }
}
