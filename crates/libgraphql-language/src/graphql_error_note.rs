use crate::SmallVec;
use crate::SourcePosition;

/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// General context about the error. Rendered as `= note: ...`.
    General,

    /// Actionable suggestion for fixing the error. Rendered as `= help: ...`.
    Help,

    /// Reference to the GraphQL specification. Rendered as `= spec: ...`.
    Spec,
}

/// An error note providing additional context about a syntax error.
///
/// Notes augment the primary error message with explanatory context,
/// suggestions, specification references, or a related source position
/// (e.g. where an unterminated string was opened).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// Optional position of a related location in the same source.
    pub position: Option<SourcePosition>,
}

impl GraphQLErrorNote {
    /// Creates a general note without a position.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            position: None,
        }
    }

    /// Creates a general note pointing at a related position.
    pub fn general_at(message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            position: Some(position),
        }
    }

    /// Creates a help note.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            position: None,
        }
    }

    /// Creates a spec reference note.
    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            position: None,
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes, avoiding heap
/// allocation in the common case.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
