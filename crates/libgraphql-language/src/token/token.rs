use crate::SourcePosition;
use crate::token::TokenKind;

/// Index of a [`Token`] within the [`Lexer`](crate::Lexer)'s token arena.
///
/// Tokens are stored in source order, comments included, so the token after
/// `id` is always `id + 1` (see [`Lexer::next_of()`](crate::Lexer::next_of)).
pub type TokenId = usize;

/// A lexed token with its location and (for literals) its value.
///
/// Tokens are never mutated after the lexer pushes them into its arena.
/// The link to the previous token is stored as an arena index rather than a
/// reference, so the chain has no ownership cycles.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,

    /// Byte offset of the first byte of the token.
    pub start: usize,

    /// Byte offset one past the last byte of the token.
    pub end: usize,

    /// 1-based line of `start`.
    pub line: usize,

    /// 1-based column (in characters) of `start`.
    pub column: usize,

    /// Line and column of `end`.
    pub end_position: SourcePosition,

    /// The interpreted value for `Name`, `Int`, `Float`, `String`,
    /// `BlockString`, and `Comment` tokens:
    /// - names and numbers: their raw text
    /// - strings: the value after escape processing
    /// - block strings: the value after indentation stripping
    /// - comments: the text after `#`
    pub value: Option<String>,

    /// The token before this one in the arena (including comments), or
    /// `None` for the `<SOF>` token.
    pub prev: Option<TokenId>,
}

impl Token {
    /// Returns the start position as a [`SourcePosition`].
    pub fn start_position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column)
    }

    /// Describes this token for diagnostics, e.g. `Name "foo"`, `"{"`, or
    /// `<EOF>`.
    pub fn description(&self) -> String {
        match &self.value {
            Some(value) => format!("{} \"{value}\"", self.kind.description()),
            None => self.kind.description(),
        }
    }
}
