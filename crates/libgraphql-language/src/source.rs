use crate::SourcePosition;
use serde::Deserialize;
use serde::Serialize;

/// The default [`Source::name`] for sources built without an explicit name.
pub const DEFAULT_SOURCE_NAME: &str = "GraphQL request";

/// A body of GraphQL source text together with a name used in diagnostics
/// (typically a file path, or [`DEFAULT_SOURCE_NAME`]).
///
/// Parsed nodes keep a shared reference to their `Source` through their
/// [`Location`](crate::ast::Location), so a `Source` is usually wrapped in an
/// `Arc` by the parser entry points.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Source {
    body: String,
    name: String,
}

impl Source {
    /// Creates a source with the default name.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: DEFAULT_SOURCE_NAME.to_string(),
        }
    }

    /// Creates a source with an explicit name (e.g. a file path).
    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
        }
    }

    /// The raw source text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The name used when reporting errors against this source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Computes the 1-based line and column of a byte offset.
    ///
    /// `\r\n`, `\r`, and `\n` each count as a single line break. Offsets past
    /// the end of the body are clamped to the end.
    pub fn location_of(&self, offset: usize) -> SourcePosition {
        let mut end = offset.min(self.body.len());
        while !self.body.is_char_boundary(end) {
            end -= 1;
        }

        let mut line = 1;
        let mut line_start = 0;
        let bytes = self.body.as_bytes();
        let mut i = 0;
        while i < end {
            match bytes[i] {
                b'\r' => {
                    if i + 1 < end && bytes[i + 1] == b'\n' {
                        i += 1;
                    }
                    line += 1;
                    line_start = i + 1;
                },
                b'\n' => {
                    line += 1;
                    line_start = i + 1;
                },
                _ => (),
            }
            i += 1;
        }

        let column = self.body[line_start.min(end)..end].chars().count() + 1;
        SourcePosition::new(line, column)
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}

impl From<&String> for Source {
    fn from(body: &String) -> Self {
        Source::new(body.as_str())
    }
}
