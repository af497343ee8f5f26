/// Categorizes syntax errors for programmatic handling.
///
/// Each variant contains the minimal data needed for programmatic decisions.
/// The human-readable description lives in
/// [`GraphQLSyntaxError::message()`](crate::GraphQLSyntaxError::message).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A character that cannot start any token.
    ///
    /// ```text
    /// { field ^ }
    ///         ^ Unexpected character: "^".
    /// ```
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// A malformed Int or Float literal (leading zero, missing digits, or a
    /// number directly followed by a name).
    #[error("invalid number")]
    InvalidNumber,

    /// A string literal containing a forbidden character or a malformed
    /// escape sequence.
    #[error("invalid string")]
    InvalidString,

    /// A string or block string that reaches a line end (strings only) or
    /// the end of input before its closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// The parser expected something other than the token it found.
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        /// What was expected, when the grammar names a single construct
        /// (e.g. `"{"`, `Name`, `"on"`).
        expected: Option<String>,
        /// Description of what was found (e.g. `Name "foo"`, `<EOF>`).
        found: String,
    },

    /// A name that is reserved in its position (`on` as a fragment name;
    /// `true`, `false`, `null` as enum values).
    #[error("reserved name: `{name}`")]
    ReservedName { name: String },

    /// A description attached to something that cannot carry one.
    #[error("invalid description")]
    InvalidDescription,

    /// The document exceeded the configured
    /// [`ParseOptions::max_tokens`](crate::ParseOptions::max_tokens).
    #[error("token limit of {max_tokens} exceeded")]
    TokenLimitExceeded { max_tokens: usize },

    /// Values, selection sets, or type references nested deeper than the
    /// parser's recursion limit.
    #[error("nesting depth limit of {max_depth} exceeded")]
    NestingTooDeep { max_depth: usize },
}
