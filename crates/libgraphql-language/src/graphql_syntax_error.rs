use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::Source;
use crate::SourcePosition;
use crate::SyntaxErrorKind;

/// A lexical or grammatical error, raised at the first problem found.
///
/// The lexer and parser never recover: the first error aborts the parse and
/// is returned to the caller with the offending byte offset, its 1-based
/// line/column, and the name of the source it was found in.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Syntax Error: {message}")]
pub struct GraphQLSyntaxError {
    /// Human-readable description, e.g. `Expected Name, found "}".`.
    message: String,

    /// Categorized error kind for programmatic handling.
    kind: SyntaxErrorKind,

    /// [`Source::name()`] of the source the error was found in.
    source_name: String,

    /// Byte offset of the error within the source body.
    position: usize,

    /// Line and column of `position`.
    location: SourcePosition,

    /// Additional notes providing context and suggestions.
    notes: GraphQLErrorNotes,
}

impl GraphQLSyntaxError {
    /// Creates a syntax error at `position` within `source`.
    pub fn new(
        source: &Source,
        position: usize,
        kind: SyntaxErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            source_name: source.name().to_string(),
            position,
            location: source.location_of(position),
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Returns the human-readable description (without the `Syntax Error:`
    /// prefix).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Returns the name of the source the error was found in.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Returns the byte offset of the error.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the 1-based line and column of the error.
    pub fn location(&self) -> SourcePosition {
        self.location
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Attaches a note, builder-style.
    pub fn with_note(mut self, note: GraphQLErrorNote) -> Self {
        self.notes.push(note);
        self
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// schema.graphql:5:12: error: Expected ":", found Name "String".
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: error: {}",
            self.source_name,
            self.location.line(),
            self.location.column(),
            self.message,
        )
    }

    /// Formats this error as a diagnostic with a source snippet.
    ///
    /// ```text
    /// error: Expected ":", found Name "String".
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^
    ///    = help: ...
    /// ```
    ///
    /// `source` should be the body the error was raised against. If the line
    /// cannot be found in it the snippet is omitted.
    pub fn format_detailed(&self, source: &str) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.source_name,
            self.location.line(),
            self.location.column(),
        ));

        if let Some(snippet) = format_snippet(source, self.location, '^') {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                GraphQLErrorNoteKind::General => "note",
                GraphQLErrorNoteKind::Help => "help",
                GraphQLErrorNoteKind::Spec => "spec",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));
            if let Some(position) = note.position
                && let Some(snippet) = format_snippet(source, position, '-')
            {
                output.push_str(&snippet);
            }
        }

        output
    }
}

/// Renders the line containing `position` with a marker under its column.
fn format_snippet(source: &str, position: SourcePosition, marker: char) -> Option<String> {
    let line_content = split_lines(source).nth(position.line().checked_sub(1)?)?;

    let line_num = position.line();
    let width = line_num.to_string().len().max(2);
    let padding = position.column() - 1;

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", ""));
    output.push_str(&format!("{line_num:>width$} | {line_content}\n"));
    output.push_str(&format!("{:>width$} | {:>padding$}{marker}\n", "", ""));
    Some(output)
}

/// Splits on `\r\n`, `\r`, and `\n`, the GraphQL line terminators.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\n', '\r']) {
            Some(idx) => {
                let terminator_len =
                    if current[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[idx + terminator_len..]);
                Some(&current[..idx])
            },
            None => {
                rest = None;
                Some(current)
            },
        }
    })
}
