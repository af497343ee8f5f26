/// The kind of a GraphQL token.
///
/// Literal kinds (`Name`, `Int`, `Float`, `String`, `BlockString`,
/// `Comment`) carry their text in [`Token::value`](crate::token::Token).
/// `true`, `false`, and `null` are lexed as `Name` tokens; the parser gives
/// them meaning by position.
///
/// Negative numbers like `-123` are lexed as single `Int` tokens, matching
/// the GraphQL grammar for `IntValue`/`FloatValue`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    // =========================================================================
    // Sentinels
    // =========================================================================
    /// Start of input. Always the first token in the arena.
    Sof,
    /// End of input. The lexer keeps returning it once reached.
    Eof,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    Name,
    Int,
    Float,
    String,
    BlockString,

    // =========================================================================
    // Ignored (linked into the token chain, never returned by `advance()`)
    // =========================================================================
    Comment,
}

impl TokenKind {
    /// Returns the source text of a punctuator, or `None` for every other
    /// kind.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Ampersand => Some("&"),
            TokenKind::At => Some("@"),
            TokenKind::Bang => Some("!"),
            TokenKind::Colon => Some(":"),
            TokenKind::CurlyBraceClose => Some("}"),
            TokenKind::CurlyBraceOpen => Some("{"),
            TokenKind::Dollar => Some("$"),
            TokenKind::Ellipsis => Some("..."),
            TokenKind::Equals => Some("="),
            TokenKind::ParenClose => Some(")"),
            TokenKind::ParenOpen => Some("("),
            TokenKind::Pipe => Some("|"),
            TokenKind::SquareBracketClose => Some("]"),
            TokenKind::SquareBracketOpen => Some("["),

            TokenKind::Sof
            | TokenKind::Eof
            | TokenKind::Name
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::BlockString
            | TokenKind::Comment => None,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Describes this kind for diagnostics: punctuators are quoted
    /// (`"{"`), everything else is named (`Name`, `<EOF>`).
    pub fn description(&self) -> String {
        match self.as_punctuator_str() {
            Some(punctuator) => format!("\"{punctuator}\""),
            None => self.name().to_string(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TokenKind::Sof => "<SOF>",
            TokenKind::Eof => "<EOF>",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::BlockString => "BlockString",
            TokenKind::Comment => "Comment",
            punctuator => punctuator.as_punctuator_str().unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
