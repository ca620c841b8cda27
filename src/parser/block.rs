/// A run of body text together with the headings active above it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Active heading texts, outermost first
    pub headings: Vec<String>,
    /// Non-blank lines of the block, paragraphs separated by a blank line
    pub text: String,
}

/// Stack of active heading texts, one entry per nesting level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingPath {
    levels: Vec<String>,
}

impl HeadingPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a heading at `level` (1-based).
    ///
    /// Headings at the same or a deeper level are dropped; shallower ones are kept.
    pub fn enter(&mut self, level: usize, text: impl Into<String>) {
        self.levels.truncate(level.saturating_sub(1));
        self.levels.push(text.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.levels
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.levels.clone()
    }
}
