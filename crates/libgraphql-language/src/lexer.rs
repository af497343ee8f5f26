//! Lazily converts a [`Source`] into [`Token`]s.
//!
//! The lexer keeps every token it produces, comments included, in an arena
//! ordered by source position. The parser only ever sees significant tokens
//! through [`Lexer::advance()`] and [`Lexer::lookahead()`]; comments stay in
//! the arena so the full token chain can be walked afterwards with
//! [`Lexer::prev_of()`] and [`Lexer::next_of()`].
//!
//! ```rust
//! use libgraphql_language::Lexer;
//! use libgraphql_language::Source;
//! use libgraphql_language::token::TokenKind;
//! use std::sync::Arc;
//!
//! let source = Arc::new(Source::new("{ name }"));
//! let mut lexer = Lexer::new(&source);
//! assert_eq!(lexer.advance().unwrap().kind, TokenKind::CurlyBraceOpen);
//! assert_eq!(lexer.advance().unwrap().value.as_deref(), Some("name"));
//! assert_eq!(lexer.advance().unwrap().kind, TokenKind::CurlyBraceClose);
//! assert_eq!(lexer.advance().unwrap().kind, TokenKind::Eof);
//! ```

use crate::GraphQLErrorNote;
use crate::GraphQLSyntaxError;
use crate::Source;
use crate::SourcePosition;
use crate::SyntaxErrorKind;
use crate::block_string::dedent_block_string_lines;
use crate::token::Token;
use crate::token::TokenId;
use crate::token::TokenKind;
use std::sync::Arc;

type LexResult<T> = Result<T, GraphQLSyntaxError>;

/// A lazy GraphQL lexer over a shared [`Source`].
pub struct Lexer<'src> {
    source: &'src Arc<Source>,

    /// The source body, borrowed once so scanning does not go through the
    /// `Arc` on every character.
    body: &'src str,

    /// Every token produced so far, in source order. Index 0 is `<SOF>`.
    tokens: Vec<Token>,

    /// The most recently advanced-to significant token.
    current: TokenId,

    /// The significant token before `current`.
    last: TokenId,

    // Scan state. Always points just past the last token pushed to `tokens`.
    curr_byte_offset: usize,
    curr_line: usize,
    curr_col: usize,
    last_char_was_cr: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned on the `<SOF>` token of `source`.
    pub fn new(source: &'src Arc<Source>) -> Self {
        let sof = Token {
            kind: TokenKind::Sof,
            start: 0,
            end: 0,
            line: 1,
            column: 1,
            end_position: SourcePosition::new(1, 1),
            value: None,
            prev: None,
        };
        Self {
            source,
            body: source.body(),
            tokens: vec![sof],
            current: 0,
            last: 0,
            curr_byte_offset: 0,
            curr_line: 1,
            curr_col: 1,
            last_char_was_cr: false,
        }
    }

    /// The source being lexed.
    pub fn source(&self) -> &'src Arc<Source> {
        self.source
    }

    /// Advances to the next significant token and returns it.
    ///
    /// Once `<EOF>` is reached it is returned on every further call.
    pub fn advance(&mut self) -> LexResult<&Token> {
        let next = self.lookahead_id()?;
        self.last = self.current;
        self.current = next;
        Ok(&self.tokens[next])
    }

    /// Returns the next significant token without advancing.
    pub fn lookahead(&mut self) -> LexResult<&Token> {
        let next = self.lookahead_id()?;
        Ok(&self.tokens[next])
    }

    /// The current token (initially `<SOF>`).
    pub fn token(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Arena index of [`Lexer::token()`].
    pub fn token_id(&self) -> TokenId {
        self.current
    }

    /// The significant token advanced past most recently. Nodes end here.
    pub fn last_token(&self) -> &Token {
        &self.tokens[self.last]
    }

    /// Looks up a token by arena index.
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    /// The token following `id`, comments included, if it has been lexed.
    pub fn next_of(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.checked_add(1)?)
    }

    /// The token preceding `id`, comments included.
    pub fn prev_of(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)?.prev.and_then(|prev| self.tokens.get(prev))
    }

    /// Every token lexed so far, in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Finds (lexing on demand) the first significant token after
    /// `current`.
    fn lookahead_id(&mut self) -> LexResult<TokenId> {
        if self.tokens[self.current].kind == TokenKind::Eof {
            return Ok(self.current);
        }

        let mut id = self.current + 1;
        loop {
            if id == self.tokens.len() {
                let token = self.read_token(id - 1)?;
                self.tokens.push(token);
            }
            if self.tokens[id].kind != TokenKind::Comment {
                return Ok(id);
            }
            id += 1;
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.body[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col)
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_byte_nth(&self, n: usize) -> Option<u8> {
        self.body.as_bytes().get(self.curr_byte_offset + n).copied()
    }

    /// Consumes one character, keeping line and column up to date. `\r\n`
    /// counts as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.curr_line += 1;
                self.curr_col = 1;
            },
            '\r' => {
                self.curr_line += 1;
                self.curr_col = 1;
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_col += 1;
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `len` bytes known to contain no line terminators.
    fn consume_same_line(&mut self, len: usize) {
        let text = &self.body[self.curr_byte_offset..self.curr_byte_offset + len];
        self.curr_col += text.chars().count();
        self.curr_byte_offset += len;
        self.last_char_was_cr = false;
    }

    fn make_token(
        &self,
        kind: TokenKind,
        start: usize,
        start_position: SourcePosition,
        value: Option<String>,
        prev: TokenId,
    ) -> Token {
        Token {
            kind,
            start,
            end: self.curr_byte_offset,
            line: start_position.line(),
            column: start_position.column(),
            end_position: self.curr_position(),
            value,
            prev: Some(prev),
        }
    }

    fn error(
        &self,
        position: usize,
        kind: SyntaxErrorKind,
        message: impl Into<String>,
    ) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(self.source, position, kind, message)
    }

    /// Describes the character at `position` for error messages: printable
    /// ASCII in quotes, everything else as `U+XXXX`, and `<EOF>` past the
    /// end.
    fn describe_char_at(&self, position: usize) -> String {
        match self.body.get(position..).and_then(|rest| rest.chars().next()) {
            None => TokenKind::Eof.description(),
            Some('"') => "'\"'".to_string(),
            Some(ch) if (' '..='~').contains(&ch) => format!("\"{ch}\""),
            Some(ch) => format!("U+{:04X}", ch as u32),
        }
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Reads the token following `prev`, which may be a `Comment`.
    fn read_token(&mut self, prev: TokenId) -> LexResult<Token> {
        self.skip_ignored();

        let start = self.curr_byte_offset;
        let start_position = self.curr_position();

        let Some(ch) = self.peek_char() else {
            return Ok(self.make_token(TokenKind::Eof, start, start_position, None, prev));
        };

        let punctuator = match ch {
            '!' => Some(TokenKind::Bang),
            '$' => Some(TokenKind::Dollar),
            '&' => Some(TokenKind::Ampersand),
            '(' => Some(TokenKind::ParenOpen),
            ')' => Some(TokenKind::ParenClose),
            ':' => Some(TokenKind::Colon),
            '=' => Some(TokenKind::Equals),
            '@' => Some(TokenKind::At),
            '[' => Some(TokenKind::SquareBracketOpen),
            ']' => Some(TokenKind::SquareBracketClose),
            '{' => Some(TokenKind::CurlyBraceOpen),
            '|' => Some(TokenKind::Pipe),
            '}' => Some(TokenKind::CurlyBraceClose),
            _ => None,
        };
        if let Some(kind) = punctuator {
            self.consume();
            return Ok(self.make_token(kind, start, start_position, None, prev));
        }

        match ch {
            '#' => Ok(self.read_comment(start, start_position, prev)),
            '.' => self.read_ellipsis(start, start_position, prev),
            '"' if self.remaining().starts_with("\"\"\"") => {
                self.read_block_string(start, start_position, prev)
            },
            '"' => self.read_string(start, start_position, prev),
            c if is_name_start(c) => Ok(self.read_name(start, start_position, prev)),
            c if c == '-' || c.is_ascii_digit() => {
                self.read_number(start, start_position, prev)
            },
            '\'' => Err(self.error(
                start,
                SyntaxErrorKind::UnexpectedCharacter,
                "Unexpected single quote character ('), did you mean to use a double \
                 quote (\")?",
            )),
            _ => Err(self.error(
                start,
                SyntaxErrorKind::UnexpectedCharacter,
                format!("Unexpected character: {}.", self.describe_char_at(start)),
            )),
        }
    }

    /// Skips whitespace, line terminators, commas, and byte order marks.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | ',' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    /// Reads a `#` comment up to (not including) the next line terminator.
    fn read_comment(
        &mut self,
        start: usize,
        start_position: SourcePosition,
        prev: TokenId,
    ) -> Token {
        let content = &self.remaining()[1..];
        let content_len = memchr::memchr2(b'\n', b'\r', content.as_bytes())
            .unwrap_or(content.len());
        let value = content[..content_len].to_string();
        self.consume_same_line(1 + content_len);
        self.make_token(TokenKind::Comment, start, start_position, Some(value), prev)
    }

    fn read_ellipsis(
        &mut self,
        start: usize,
        start_position: SourcePosition,
        prev: TokenId,
    ) -> LexResult<Token> {
        if self.remaining().starts_with("...") {
            self.consume_same_line(3);
            return Ok(self.make_token(TokenKind::Ellipsis, start, start_position, None, prev));
        }

        let mut error = self.error(
            start,
            SyntaxErrorKind::UnexpectedCharacter,
            format!("Unexpected character: {}.", self.describe_char_at(start)),
        );
        if self.remaining().starts_with("..") {
            error = error.with_note(GraphQLErrorNote::help(
                "Add one more `.` to form the spread operator `...`",
            ));
        }
        Err(error)
    }

    /// Reads a name matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    fn read_name(
        &mut self,
        start: usize,
        start_position: SourcePosition,
        prev: TokenId,
    ) -> Token {
        let len = self
            .remaining()
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        let value = self.remaining()[..len].to_string();
        self.consume_same_line(len);
        self.make_token(TokenKind::Name, start, start_position, Some(value), prev)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Reads an Int or Float literal.
    ///
    /// ```text
    /// IntValue   ::= -? (0 | [1-9][0-9]*)
    /// FloatValue ::= IntValue (.[0-9]+)? ([eE][+-]?[0-9]+)?   (fraction or exponent required)
    /// ```
    ///
    /// A number immediately followed by `.` or a name start is rejected so
    /// that `1.` or `123abc` never lex as two tokens.
    fn read_number(
        &mut self,
        start: usize,
        start_position: SourcePosition,
        prev: TokenId,
    ) -> LexResult<Token> {
        let mut is_float = false;

        if self.peek_byte_nth(0) == Some(b'-') {
            self.consume_same_line(1);
        }

        if self.peek_byte_nth(0) == Some(b'0') {
            self.consume_same_line(1);
            if self.peek_byte_nth(0).is_some_and(|b| b.is_ascii_digit()) {
                return Err(self.error(
                    self.curr_byte_offset,
                    SyntaxErrorKind::InvalidNumber,
                    format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        self.describe_char_at(self.curr_byte_offset),
                    ),
                ));
            }
        } else {
            self.read_digits()?;
        }

        if self.peek_byte_nth(0) == Some(b'.') {
            is_float = true;
            self.consume_same_line(1);
            self.read_digits()?;
        }

        if matches!(self.peek_byte_nth(0), Some(b'e' | b'E')) {
            is_float = true;
            self.consume_same_line(1);
            if matches!(self.peek_byte_nth(0), Some(b'+' | b'-')) {
                self.consume_same_line(1);
            }
            self.read_digits()?;
        }

        if let Some(ch) = self.peek_char()
            && (ch == '.' || is_name_start(ch))
        {
            return Err(self.expected_digit_error());
        }

        let value = self.body[start..self.curr_byte_offset].to_string();
        let kind = if is_float { TokenKind::Float } else { TokenKind::Int };
        Ok(self.make_token(kind, start, start_position, Some(value), prev))
    }

    /// Reads one or more digits.
    fn read_digits(&mut self) -> LexResult<()> {
        let len = self
            .remaining()
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 {
            return Err(self.expected_digit_error());
        }
        self.consume_same_line(len);
        Ok(())
    }

    fn expected_digit_error(&self) -> GraphQLSyntaxError {
        self.error(
            self.curr_byte_offset,
            SyntaxErrorKind::InvalidNumber,
            format!(
                "Invalid number, expected digit but got: {}.",
                self.describe_char_at(self.curr_byte_offset),
            ),
        )
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Reads a single-line `"..."` string, resolving escape sequences.
    fn read_string(
        &mut self,
        start: usize,
        start_position: SourcePosition,
        prev: TokenId,
    ) -> LexResult<Token> {
        self.consume();
        let mut value = String::new();

        loop {
            let position = self.curr_byte_offset;
            match self.peek_char() {
                None | Some('\n' | '\r') => {
                    return Err(self.unterminated_string_error(position, start_position));
                },
                Some('"') => {
                    self.consume();
                    return Ok(self.make_token(
                        TokenKind::String,
                        start,
                        start_position,
                        Some(value),
                        prev,
                    ));
                },
                Some('\\') => {
                    let (ch, len) = self.read_escape(position)?;
                    value.push(ch);
                    self.consume_same_line(len);
                },
                Some(ch) if is_forbidden_source_char(ch) => {
                    return Err(self.invalid_string_char_error(position));
                },
                Some(ch) => {
                    self.consume();
                    value.push(ch);
                },
            }
        }
    }

    /// Decodes the escape sequence starting with the `\` at `position`.
    /// Returns the decoded character and the escape's length in bytes.
    fn read_escape(&self, position: usize) -> LexResult<(char, usize)> {
        let escape = &self.body[position..];
        let mut chars = escape.chars().skip(1);
        let decoded = match chars.next() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') if escape[2..].starts_with('{') => {
                return self.read_variable_width_unicode_escape(position);
            },
            Some('u') => return self.read_fixed_width_unicode_escape(position),
            Some(other) => {
                return Err(self.error(
                    position,
                    SyntaxErrorKind::InvalidString,
                    format!("Invalid character escape sequence: \"\\{other}\"."),
                ));
            },
            None => {
                return Err(self.unterminated_string_error(
                    position + 1,
                    self.source.location_of(position),
                ));
            },
        };
        Ok((decoded, 2))
    }

    /// `\u{X...}` with one to eight hex digits naming a Unicode scalar
    /// value. Digits past the sixth can only be leading zeros.
    fn read_variable_width_unicode_escape(&self, position: usize) -> LexResult<(char, usize)> {
        const MAX_ESCAPE_LEN: usize = "\\u{00000000}".len();

        let bytes = self.body.as_bytes();
        let mut code_point: u32 = 0;
        let mut size = 3;
        while size < MAX_ESCAPE_LEN {
            let Some(&b) = bytes.get(position + size) else {
                break;
            };
            size += 1;
            if b == b'}' {
                if size < 5 {
                    break;
                }
                return match char::from_u32(code_point) {
                    Some(ch) => Ok((ch, size)),
                    None => break,
                };
            }
            let Some(digit) = (b as char).to_digit(16) else {
                break;
            };
            code_point = (code_point << 4) | digit;
            if code_point > i32::MAX as u32 {
                break;
            }
        }
        Err(self.invalid_unicode_escape_error(position, size))
    }

    /// `\uXXXX`, combining a following `\uXXXX` when the pair forms a
    /// surrogate pair.
    fn read_fixed_width_unicode_escape(&self, position: usize) -> LexResult<(char, usize)> {
        let leading = self.read_hex4(position + 2);
        if let Some(code) = leading {
            if let Some(ch) = char::from_u32(code) {
                return Ok((ch, 6));
            }
            if is_leading_surrogate(code)
                && self.body[position + 6..].starts_with("\\u")
                && let Some(trailing) = self.read_hex4(position + 8)
                && is_trailing_surrogate(trailing)
            {
                let combined = 0x10000 + ((code - 0xD800) << 10) + (trailing - 0xDC00);
                if let Some(ch) = char::from_u32(combined) {
                    return Ok((ch, 12));
                }
            }
        }
        Err(self.invalid_unicode_escape_error(position, 6))
    }

    fn read_hex4(&self, position: usize) -> Option<u32> {
        let hex = self.body.get(position..position + 4)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok()
    }

    fn invalid_unicode_escape_error(&self, position: usize, size: usize) -> GraphQLSyntaxError {
        let mut end = (position + size).min(self.body.len());
        while !self.body.is_char_boundary(end) {
            end += 1;
        }
        self.error(
            position,
            SyntaxErrorKind::InvalidString,
            format!("Invalid Unicode escape sequence: \"{}\".", &self.body[position..end]),
        )
    }

    /// Reads a `"""..."""` block string. The token value is the dedented
    /// content with `\"""` unescaped.
    fn read_block_string(
        &mut self,
        start: usize,
        start_position: SourcePosition,
        prev: TokenId,
    ) -> LexResult<Token> {
        self.consume_same_line(3);
        let mut lines: Vec<String> = Vec::new();
        let mut current_line = String::new();

        loop {
            let position = self.curr_byte_offset;
            let rest = self.remaining();
            if rest.starts_with("\"\"\"") {
                self.consume_same_line(3);
                lines.push(current_line);
                let value = dedent_block_string_lines(&lines).join("\n");
                return Ok(self.make_token(
                    TokenKind::BlockString,
                    start,
                    start_position,
                    Some(value),
                    prev,
                ));
            }
            if rest.starts_with("\\\"\"\"") {
                current_line.push_str("\"\"\"");
                self.consume_same_line(4);
                continue;
            }

            match self.peek_char() {
                None => {
                    return Err(self.unterminated_string_error(position, start_position));
                },
                Some('\n' | '\r') => {
                    if self.consume() == Some('\r') && self.peek_char() == Some('\n') {
                        self.consume();
                    }
                    lines.push(std::mem::take(&mut current_line));
                },
                Some(ch) if is_forbidden_source_char(ch) => {
                    return Err(self.invalid_string_char_error(position));
                },
                Some(ch) => {
                    self.consume();
                    current_line.push(ch);
                },
            }
        }
    }

    fn unterminated_string_error(
        &self,
        position: usize,
        opened_at: SourcePosition,
    ) -> GraphQLSyntaxError {
        self.error(position, SyntaxErrorKind::UnterminatedString, "Unterminated string.")
            .with_note(GraphQLErrorNote::general_at("String started here", opened_at))
    }

    fn invalid_string_char_error(&self, position: usize) -> GraphQLSyntaxError {
        self.error(
            position,
            SyntaxErrorKind::InvalidString,
            format!(
                "Invalid character within String: {}.",
                self.describe_char_at(position),
            ),
        )
    }
}

/// Returns `true` if `ch` can start a name (`/[_A-Za-z]/`).
fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Control characters other than tab and line terminators may not appear
/// in source text, strings included.
fn is_forbidden_source_char(ch: char) -> bool {
    ch < ' ' && !matches!(ch, '\t' | '\n' | '\r')
}

fn is_leading_surrogate(code: u32) -> bool {
    (0xD800..=0xDBFF).contains(&code)
}

fn is_trailing_surrogate(code: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&code)
}
