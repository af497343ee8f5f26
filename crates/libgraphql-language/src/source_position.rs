use serde::Deserialize;
use serde::Serialize;

/// A human-facing position within a [`Source`](crate::Source).
///
/// This is a pure data struct with no mutation methods. The lexer computes
/// position values as it scans input.
///
/// # Indexing Convention
///
/// **Both values are 1-based**, matching what editors display:
/// - `line`: 1 = first line of the document
/// - `column`: 1 = first character of the line
///
/// Columns count Unicode scalar values (not bytes), so `"🎉"` (4 bytes)
/// advances the column by 1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct SourcePosition {
    line: usize,
    column: usize,
}

impl SourcePosition {
    /// Create a new `SourcePosition` from a 1-based line and column.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based column (in characters) within the line.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
