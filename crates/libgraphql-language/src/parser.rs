//! Recursive-descent parser producing [`ast`](crate::ast) trees.
//!
//! The parser reads one token of lookahead from a [`Lexer`] (two when
//! telling a described definition apart from an executable one) and stops
//! at the first error.

use crate::GraphQLErrorNote;
use crate::GraphQLSyntaxError;
use crate::Lexer;
use crate::ParseOptions;
use crate::Source;
use crate::SyntaxErrorKind;
use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullValue;
use crate::ast::NullableType;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::token::Token;
use crate::token::TokenId;
use crate::token::TokenKind;
use std::sync::Arc;

type ParseResult<T> = Result<T, GraphQLSyntaxError>;

const DESCRIPTIONS_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Descriptions";
const ENUM_VALUES_SPEC_URL: &str = "https://spec.graphql.org/October2021/#EnumValue";

/// Parses a complete GraphQL document (executable definitions, type-system
/// definitions, or both).
///
/// ```
/// use libgraphql_language::ParseOptions;
/// use libgraphql_language::parse;
///
/// let document = parse("query { id, name }", ParseOptions::default()).unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub fn parse(source: impl Into<Source>, options: ParseOptions) -> ParseResult<Document> {
    let source = Arc::new(source.into());
    let mut parser = Parser::new(&source, options);
    parser.parse_document()
}

/// Parses a standalone value literal, which may reference variables
/// (e.g. `[1, $two]`).
pub fn parse_value(source: impl Into<Source>, options: ParseOptions) -> ParseResult<Value> {
    let source = Arc::new(source.into());
    let mut parser = Parser::new(&source, options);
    parser.expect_token(TokenKind::Sof)?;
    let value = parser.parse_value_literal(false)?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(value)
}

/// Parses a standalone constant value literal. Variables are rejected.
pub fn parse_const_value(
    source: impl Into<Source>,
    options: ParseOptions,
) -> ParseResult<Value> {
    let source = Arc::new(source.into());
    let mut parser = Parser::new(&source, options);
    parser.expect_token(TokenKind::Sof)?;
    let value = parser.parse_const_value_literal()?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(value)
}

/// Parses a standalone type reference (e.g. `[String!]!`).
pub fn parse_type(source: impl Into<Source>, options: ParseOptions) -> ParseResult<Type> {
    let source = Arc::new(source.into());
    let mut parser = Parser::new(&source, options);
    parser.expect_token(TokenKind::Sof)?;
    let type_ = parser.parse_type_reference()?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(type_)
}

/// A GraphQL parser over one [`Source`].
///
/// Most callers want the free functions ([`parse()`], [`parse_value()`],
/// ...). `Parser` is public for callers that already hold an
/// `Arc<Source>` or want to parse a production in isolation.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    options: ParseOptions,

    /// Significant non-EOF tokens consumed so far.
    token_count: usize,

    /// Depth of nested values, selection sets, and list types currently
    /// being parsed. Bounded by [`ParseOptions::max_nesting_depth`].
    recursion_depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src Arc<Source>, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(source),
            options,
            token_count: 0,
            recursion_depth: 0,
        }
    }

    /// Number of significant tokens (excluding `<EOF>`) consumed so far.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Moves to the next significant token, enforcing
    /// [`ParseOptions::max_tokens`].
    fn advance_lexer(&mut self) -> ParseResult<()> {
        let token = self.lexer.advance()?;
        if token.kind == TokenKind::Eof {
            return Ok(());
        }
        let start = token.start;

        self.token_count += 1;
        if let Some(max_tokens) = self.options.max_tokens
            && self.token_count > max_tokens
        {
            tracing::debug!(
                max_tokens,
                source = self.lexer.source().name(),
                "aborting parse: token limit exceeded",
            );
            return Err(self.error_at(
                start,
                SyntaxErrorKind::TokenLimitExceeded { max_tokens },
                format!("Document contains more than {max_tokens} tokens. Parsing aborted."),
            ));
        }
        Ok(())
    }

    fn peek(&self, kind: TokenKind) -> bool {
        self.lexer.token().kind == kind
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        let token = self.lexer.token();
        token.kind == TokenKind::Name && token.value.as_deref() == Some(keyword)
    }

    /// Consumes a token of `kind`, or fails with
    /// `Expected <kind>, found <token>.`
    fn expect_token(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek(kind) {
            return self.advance_lexer();
        }
        let token = self.lexer.token();
        let expected = kind.description();
        let found = token.description();
        Err(self.error_at(
            token.start,
            SyntaxErrorKind::UnexpectedToken {
                expected: Some(expected.clone()),
                found: found.clone(),
            },
            format!("Expected {expected}, found {found}."),
        ))
    }

    /// Consumes a token of `kind` if it is next.
    fn expect_optional_token(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.peek(kind) {
            self.advance_lexer()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the name `keyword`, or fails with
    /// `Expected "<keyword>", found <token>.`
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if self.peek_keyword(keyword) {
            return self.advance_lexer();
        }
        let token = self.lexer.token();
        let found = token.description();
        Err(self.error_at(
            token.start,
            SyntaxErrorKind::UnexpectedToken {
                expected: Some(format!("\"{keyword}\"")),
                found: found.clone(),
            },
            format!("Expected \"{keyword}\", found {found}."),
        ))
    }

    /// Consumes the name `keyword` if it is next.
    fn expect_optional_keyword(&mut self, keyword: &str) -> ParseResult<bool> {
        if self.peek_keyword(keyword) {
            self.advance_lexer()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// `Unexpected <token>.` for the current token.
    fn unexpected(&self) -> GraphQLSyntaxError {
        self.unexpected_token(self.lexer.token())
    }

    /// `Unexpected <token>.` for the token at arena index `id`.
    fn unexpected_at(&self, id: TokenId) -> GraphQLSyntaxError {
        match self.lexer.get(id) {
            Some(token) => self.unexpected_token(token),
            None => self.unexpected(),
        }
    }

    fn unexpected_token(&self, token: &Token) -> GraphQLSyntaxError {
        let found = token.description();
        self.error_at(
            token.start,
            SyntaxErrorKind::UnexpectedToken {
                expected: None,
                found: found.clone(),
            },
            format!("Unexpected {found}."),
        )
    }

    fn error_at(
        &self,
        position: usize,
        kind: SyntaxErrorKind,
        message: impl Into<String>,
    ) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(self.lexer.source(), position, kind, message)
    }

    /// The location from the start of token `start` to the end of the last
    /// consumed token, unless locations are disabled.
    fn loc(&self, start: TokenId) -> Option<Location> {
        if self.options.no_location {
            return None;
        }
        let start_token = self.lexer.get(start)?;
        Some(Location::new(start_token, self.lexer.last_token(), self.lexer.source()))
    }

    fn enter_recursion(&mut self) -> ParseResult<()> {
        self.recursion_depth += 1;
        let max_depth = self.options.max_nesting_depth;
        if self.recursion_depth > max_depth {
            self.recursion_depth -= 1;
            return Err(self.error_at(
                self.lexer.token().start,
                SyntaxErrorKind::NestingTooDeep { max_depth },
                format!("Document nests deeper than {max_depth} levels. Parsing aborted."),
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // List helpers
    // =========================================================================

    /// `open item* close`: zero or more items. The delimiters are required.
    fn any<T>(
        &mut self,
        open: TokenKind,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect_token(open)?;
        let mut items = Vec::new();
        while !self.expect_optional_token(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    /// `(open item+ close)?`: one or more items when the opening delimiter
    /// is present, otherwise an empty list.
    fn optional_many<T>(
        &mut self,
        open: TokenKind,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        if !self.expect_optional_token(open)? {
            return Ok(Vec::new());
        }
        let mut items = Vec::new();
        loop {
            items.push(parse_item(self)?);
            if self.expect_optional_token(close)? {
                return Ok(items);
            }
        }
    }

    /// `open item+ close`: one or more items. The delimiters are required.
    fn many<T>(
        &mut self,
        open: TokenKind,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect_token(open)?;
        let mut items = Vec::new();
        loop {
            items.push(parse_item(self)?);
            if self.expect_optional_token(close)? {
                return Ok(items);
            }
        }
    }

    /// `delimiter? item (delimiter item)*`
    fn delimited_many<T>(
        &mut self,
        delimiter: TokenKind,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        self.expect_optional_token(delimiter)?;
        let mut items = Vec::new();
        loop {
            items.push(parse_item(self)?);
            if !self.expect_optional_token(delimiter)? {
                return Ok(items);
            }
        }
    }

    // =========================================================================
    // Document
    // =========================================================================

    pub fn parse_name(&mut self) -> ParseResult<Name> {
        let start = self.lexer.token_id();
        let value = self.lexer.token().value.clone().unwrap_or_default();
        self.expect_token(TokenKind::Name)?;
        Ok(Name {
            value,
            loc: self.loc(start),
        })
    }

    /// `Document : Definition+`
    pub fn parse_document(&mut self) -> ParseResult<Document> {
        let start = self.lexer.token_id();
        let definitions = self.many(TokenKind::Sof, Self::parse_definition, TokenKind::Eof)?;
        tracing::trace!(
            source = self.lexer.source().name(),
            token_count = self.token_count,
            definitions = definitions.len(),
            "parsed document",
        );
        Ok(Document {
            definitions,
            loc: self.loc(start),
        })
    }

    /// Dispatches on the definition's leading keyword. A description may
    /// precede any type-system definition, but nothing else.
    pub fn parse_definition(&mut self) -> ParseResult<Definition> {
        if self.peek(TokenKind::CurlyBraceOpen) {
            return self
                .parse_operation_definition()
                .map(Definition::OperationDefinition);
        }

        let has_description = self.peek_description();
        let keyword_token = if has_description {
            self.lexer.lookahead()?.clone()
        } else {
            self.lexer.token().clone()
        };

        if keyword_token.kind == TokenKind::Name {
            let keyword = keyword_token.value.as_deref().unwrap_or_default();
            match keyword {
                "schema" => {
                    return self.parse_schema_definition().map(Definition::SchemaDefinition);
                },
                "scalar" => {
                    return self
                        .parse_scalar_type_definition()
                        .map(Definition::ScalarTypeDefinition);
                },
                "type" => {
                    return self
                        .parse_object_type_definition()
                        .map(Definition::ObjectTypeDefinition);
                },
                "interface" => {
                    return self
                        .parse_interface_type_definition()
                        .map(Definition::InterfaceTypeDefinition);
                },
                "union" => {
                    return self
                        .parse_union_type_definition()
                        .map(Definition::UnionTypeDefinition);
                },
                "enum" => {
                    return self
                        .parse_enum_type_definition()
                        .map(Definition::EnumTypeDefinition);
                },
                "input" => {
                    return self
                        .parse_input_object_type_definition()
                        .map(Definition::InputObjectTypeDefinition);
                },
                "directive" => {
                    return self
                        .parse_directive_definition()
                        .map(Definition::DirectiveDefinition);
                },
                _ => (),
            }

            if has_description {
                return Err(self
                    .error_at(
                        self.lexer.token().start,
                        SyntaxErrorKind::InvalidDescription,
                        "Unexpected description, descriptions are supported only on type \
                         definitions.",
                    )
                    .with_note(GraphQLErrorNote::spec(DESCRIPTIONS_SPEC_URL)));
            }

            match keyword {
                "query" | "mutation" | "subscription" => {
                    return self
                        .parse_operation_definition()
                        .map(Definition::OperationDefinition);
                },
                "fragment" => {
                    return self
                        .parse_fragment_definition()
                        .map(Definition::FragmentDefinition);
                },
                "extend" => return self.parse_type_system_extension(),
                _ => (),
            }
        }

        Err(self.unexpected_token(&keyword_token))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// ```text
    /// OperationDefinition :
    ///   - SelectionSet
    ///   - OperationType Name? VariableDefinitions? Directives? SelectionSet
    /// ```
    pub fn parse_operation_definition(&mut self) -> ParseResult<OperationDefinition> {
        let start = self.lexer.token_id();
        if self.peek(TokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                loc: self.loc(start),
            });
        }

        let operation = self.parse_operation_type()?;
        let name = if self.peek(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// `OperationType : one of query mutation subscription`
    fn parse_operation_type(&mut self) -> ParseResult<OperationType> {
        let operation_token = self.lexer.token_id();
        let operation = self
            .lexer
            .token()
            .value
            .as_deref()
            .and_then(OperationType::from_keyword);
        self.expect_token(TokenKind::Name)?;
        operation.ok_or_else(|| self.unexpected_at(operation_token))
    }

    /// `VariableDefinitions : ( VariableDefinition+ )`
    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<VariableDefinition>> {
        self.optional_many(
            TokenKind::ParenOpen,
            Self::parse_variable_definition,
            TokenKind::ParenClose,
        )
    }

    /// `VariableDefinition : Variable : Type DefaultValue? Directives[Const]?`
    fn parse_variable_definition(&mut self) -> ParseResult<VariableDefinition> {
        let start = self.lexer.token_id();
        let variable = self.parse_variable()?;
        self.expect_token(TokenKind::Colon)?;
        let type_ = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(TokenKind::Equals)? {
            Some(self.parse_const_value_literal()?)
        } else {
            None
        };
        let directives = self.parse_const_directives()?;
        Ok(VariableDefinition {
            variable,
            type_,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    /// `Variable : $ Name`
    fn parse_variable(&mut self) -> ParseResult<Variable> {
        let start = self.lexer.token_id();
        self.expect_token(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable {
            name,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// `SelectionSet : { Selection+ }`
    pub fn parse_selection_set(&mut self) -> ParseResult<SelectionSet> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> ParseResult<SelectionSet> {
        let start = self.lexer.token_id();
        let selections = self.many(
            TokenKind::CurlyBraceOpen,
            Self::parse_selection,
            TokenKind::CurlyBraceClose,
        )?;
        Ok(SelectionSet {
            selections,
            loc: self.loc(start),
        })
    }

    /// `Selection : Field | FragmentSpread | InlineFragment`
    fn parse_selection(&mut self) -> ParseResult<Selection> {
        if self.peek(TokenKind::Ellipsis) {
            self.parse_fragment()
        } else {
            self.parse_field().map(Selection::Field)
        }
    }

    /// `Field : Alias? Name Arguments? Directives? SelectionSet?`
    fn parse_field(&mut self) -> ParseResult<Field> {
        let start = self.lexer.token_id();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.expect_optional_token(TokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek(TokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// `Arguments[Const] : ( Argument[?Const]+ )`
    fn parse_arguments(&mut self, is_const: bool) -> ParseResult<Vec<Argument>> {
        self.optional_many(
            TokenKind::ParenOpen,
            |parser| parser.parse_argument(is_const),
            TokenKind::ParenClose,
        )
    }

    /// `Argument[Const] : Name : Value[?Const]`
    fn parse_argument(&mut self, is_const: bool) -> ParseResult<Argument> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(Argument {
            name,
            value,
            loc: self.loc(start),
        })
    }

    /// Parses either a fragment spread or an inline fragment.
    ///
    /// ```text
    /// FragmentSpread : ... FragmentName Directives?
    /// InlineFragment : ... TypeCondition? Directives? SelectionSet
    /// ```
    fn parse_fragment(&mut self) -> ParseResult<Selection> {
        let start = self.lexer.token_id();
        self.expect_token(TokenKind::Ellipsis)?;

        let has_type_condition = self.expect_optional_keyword("on")?;
        if !has_type_condition && self.peek(TokenKind::Name) {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                loc: self.loc(start),
            }));
        }

        let type_condition = if has_type_condition {
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// ```text
    /// FragmentDefinition :
    ///   - fragment FragmentName TypeCondition Directives? SelectionSet
    /// ```
    ///
    /// With [`ParseOptions::allow_legacy_fragment_variables`], a
    /// `VariableDefinitions` list may follow the fragment name.
    pub fn parse_fragment_definition(&mut self) -> ParseResult<FragmentDefinition> {
        let start = self.lexer.token_id();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        let variable_definitions = if self.options.allow_legacy_fragment_variables {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            variable_definitions,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// `FragmentName : Name but not on`
    fn parse_fragment_name(&mut self) -> ParseResult<Name> {
        if self.peek_keyword("on") {
            let token = self.lexer.token();
            let found = token.description();
            return Err(self
                .error_at(
                    token.start,
                    SyntaxErrorKind::ReservedName {
                        name: "on".to_string(),
                    },
                    format!("Unexpected {found}."),
                )
                .with_note(GraphQLErrorNote::help(
                    "`on` introduces a type condition and cannot be used as a fragment name",
                )));
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal. When `is_const` is set, variables are
    /// rejected anywhere in the value.
    pub fn parse_value_literal(&mut self, is_const: bool) -> ParseResult<Value> {
        self.enter_recursion()?;
        let result = self.parse_value_literal_impl(is_const);
        self.exit_recursion();
        result
    }

    pub fn parse_const_value_literal(&mut self) -> ParseResult<Value> {
        self.parse_value_literal(true)
    }

    fn parse_value_literal_impl(&mut self, is_const: bool) -> ParseResult<Value> {
        let start = self.lexer.token_id();
        let token = self.lexer.token();
        let kind = token.kind;
        let value = token.value.clone().unwrap_or_default();

        match kind {
            TokenKind::SquareBracketOpen => self.parse_list(is_const),
            TokenKind::CurlyBraceOpen => self.parse_object(is_const),
            TokenKind::Int => {
                self.advance_lexer()?;
                Ok(Value::Int(IntValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            TokenKind::Float => {
                self.advance_lexer()?;
                Ok(Value::Float(FloatValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            TokenKind::String | TokenKind::BlockString => {
                self.parse_string_literal().map(Value::String)
            },
            TokenKind::Name => {
                self.advance_lexer()?;
                let loc = self.loc(start);
                Ok(match value.as_str() {
                    "true" => Value::Boolean(BooleanValue { value: true, loc }),
                    "false" => Value::Boolean(BooleanValue { value: false, loc }),
                    "null" => Value::Null(NullValue { loc }),
                    _ => Value::Enum(EnumValue { value, loc }),
                })
            },
            TokenKind::Dollar if is_const => {
                self.expect_token(TokenKind::Dollar)?;
                let name_token = self.lexer.token();
                if name_token.kind == TokenKind::Name {
                    let var_name = name_token.value.as_deref().unwrap_or_default();
                    let position = self.lexer.get(start).map_or(0, |token| token.start);
                    return Err(self.error_at(
                        position,
                        SyntaxErrorKind::UnexpectedToken {
                            expected: None,
                            found: format!("variable \"${var_name}\""),
                        },
                        format!("Unexpected variable \"${var_name}\" in constant value."),
                    ));
                }
                Err(self.unexpected_at(start))
            },
            TokenKind::Dollar => self.parse_variable().map(Value::Variable),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_string_literal(&mut self) -> ParseResult<StringValue> {
        let start = self.lexer.token_id();
        let token = self.lexer.token();
        let block = token.kind == TokenKind::BlockString;
        let value = token.value.clone().unwrap_or_default();
        self.advance_lexer()?;
        Ok(StringValue {
            value,
            block,
            loc: self.loc(start),
        })
    }

    /// `ListValue[Const] : [ Value[?Const]* ]`
    fn parse_list(&mut self, is_const: bool) -> ParseResult<Value> {
        let start = self.lexer.token_id();
        let values = self.any(
            TokenKind::SquareBracketOpen,
            |parser| parser.parse_value_literal(is_const),
            TokenKind::SquareBracketClose,
        )?;
        Ok(Value::List(ListValue {
            values,
            loc: self.loc(start),
        }))
    }

    /// `ObjectValue[Const] : { ObjectField[?Const]* }`
    fn parse_object(&mut self, is_const: bool) -> ParseResult<Value> {
        let start = self.lexer.token_id();
        let fields = self.any(
            TokenKind::CurlyBraceOpen,
            |parser| parser.parse_object_field(is_const),
            TokenKind::CurlyBraceClose,
        )?;
        Ok(Value::Object(ObjectValue {
            fields,
            loc: self.loc(start),
        }))
    }

    /// `ObjectField[Const] : Name : Value[?Const]`
    fn parse_object_field(&mut self, is_const: bool) -> ParseResult<ObjectField> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField {
            name,
            value,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    /// `Directives[Const] : Directive[?Const]+`
    fn parse_directives(&mut self, is_const: bool) -> ParseResult<Vec<Directive>> {
        let mut directives = Vec::new();
        while self.peek(TokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    fn parse_const_directives(&mut self) -> ParseResult<Vec<Directive>> {
        self.parse_directives(true)
    }

    /// `Directive[Const] : @ Name Arguments[?Const]?`
    fn parse_directive(&mut self, is_const: bool) -> ParseResult<Directive> {
        let start = self.lexer.token_id();
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(Directive {
            name,
            arguments,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// ```text
    /// Type :
    ///   - NamedType
    ///   - ListType
    ///   - NonNullType
    /// ```
    pub fn parse_type_reference(&mut self) -> ParseResult<Type> {
        self.enter_recursion()?;
        let result = self.parse_type_reference_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_reference_impl(&mut self) -> ParseResult<Type> {
        let start = self.lexer.token_id();
        let nullable = if self.expect_optional_token(TokenKind::SquareBracketOpen)? {
            let inner = self.parse_type_reference()?;
            self.expect_token(TokenKind::SquareBracketClose)?;
            NullableType::List(ListType {
                type_: Box::new(inner),
                loc: self.loc(start),
            })
        } else {
            NullableType::Named(self.parse_named_type()?)
        };

        if self.expect_optional_token(TokenKind::Bang)? {
            return Ok(Type::NonNull(NonNullType {
                type_: nullable,
                loc: self.loc(start),
            }));
        }
        Ok(nullable.into())
    }

    /// `NamedType : Name`
    fn parse_named_type(&mut self) -> ParseResult<NamedType> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        Ok(NamedType {
            name,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn peek_description(&self) -> bool {
        self.peek(TokenKind::String) || self.peek(TokenKind::BlockString)
    }

    /// `Description : StringValue`
    fn parse_description(&mut self) -> ParseResult<Option<StringValue>> {
        if self.peek_description() {
            return self.parse_string_literal().map(Some);
        }
        Ok(None)
    }

    /// `SchemaDefinition : Description? schema Directives[Const]? { OperationTypeDefinition+ }`
    fn parse_schema_definition(&mut self) -> ParseResult<SchemaDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_const_directives()?;
        let operation_types = self.many(
            TokenKind::CurlyBraceOpen,
            Self::parse_operation_type_definition,
            TokenKind::CurlyBraceClose,
        )?;
        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    /// `OperationTypeDefinition : OperationType : NamedType`
    fn parse_operation_type_definition(&mut self) -> ParseResult<OperationTypeDefinition> {
        let start = self.lexer.token_id();
        let operation = self.parse_operation_type()?;
        self.expect_token(TokenKind::Colon)?;
        let type_ = self.parse_named_type()?;
        Ok(OperationTypeDefinition {
            operation,
            type_,
            loc: self.loc(start),
        })
    }

    /// `ScalarTypeDefinition : Description? scalar Name Directives[Const]?`
    fn parse_scalar_type_definition(&mut self) -> ParseResult<ScalarTypeDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    /// ```text
    /// ObjectTypeDefinition :
    ///   Description?
    ///   type Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
    /// ```
    fn parse_object_type_definition(&mut self) -> ParseResult<ObjectTypeDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_fields_definition()?;
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `ImplementsInterfaces : implements &? NamedType (& NamedType)*`
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<NamedType>> {
        if self.expect_optional_keyword("implements")? {
            return self.delimited_many(TokenKind::Ampersand, Self::parse_named_type);
        }
        Ok(Vec::new())
    }

    /// `FieldsDefinition : { FieldDefinition+ }`
    fn parse_fields_definition(&mut self) -> ParseResult<Vec<FieldDefinition>> {
        self.optional_many(
            TokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            TokenKind::CurlyBraceClose,
        )
    }

    /// `FieldDefinition : Description? Name ArgumentsDefinition? : Type Directives[Const]?`
    fn parse_field_definition(&mut self) -> ParseResult<FieldDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect_token(TokenKind::Colon)?;
        let type_ = self.parse_type_reference()?;
        let directives = self.parse_const_directives()?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            type_,
            directives,
            loc: self.loc(start),
        })
    }

    /// `ArgumentsDefinition : ( InputValueDefinition+ )`
    fn parse_argument_defs(&mut self) -> ParseResult<Vec<InputValueDefinition>> {
        self.optional_many(
            TokenKind::ParenOpen,
            Self::parse_input_value_def,
            TokenKind::ParenClose,
        )
    }

    /// `InputValueDefinition : Description? Name : Type DefaultValue? Directives[Const]?`
    fn parse_input_value_def(&mut self) -> ParseResult<InputValueDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let type_ = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(TokenKind::Equals)? {
            Some(self.parse_const_value_literal()?)
        } else {
            None
        };
        let directives = self.parse_const_directives()?;
        Ok(InputValueDefinition {
            description,
            name,
            type_,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_interface_type_definition(&mut self) -> ParseResult<InterfaceTypeDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_fields_definition()?;
        Ok(InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `UnionTypeDefinition : Description? union Name Directives[Const]? UnionMemberTypes?`
    fn parse_union_type_definition(&mut self) -> ParseResult<UnionTypeDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let types = self.parse_union_member_types()?;
        Ok(UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            loc: self.loc(start),
        })
    }

    /// `UnionMemberTypes : = |? NamedType (| NamedType)*`
    fn parse_union_member_types(&mut self) -> ParseResult<Vec<NamedType>> {
        if self.expect_optional_token(TokenKind::Equals)? {
            return self.delimited_many(TokenKind::Pipe, Self::parse_named_type);
        }
        Ok(Vec::new())
    }

    fn parse_enum_type_definition(&mut self) -> ParseResult<EnumTypeDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let values = self.parse_enum_values_definition()?;
        Ok(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    /// `EnumValuesDefinition : { EnumValueDefinition+ }`
    fn parse_enum_values_definition(&mut self) -> ParseResult<Vec<EnumValueDefinition>> {
        self.optional_many(
            TokenKind::CurlyBraceOpen,
            Self::parse_enum_value_definition,
            TokenKind::CurlyBraceClose,
        )
    }

    /// `EnumValueDefinition : Description? EnumValue Directives[Const]?`
    fn parse_enum_value_definition(&mut self) -> ParseResult<EnumValueDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        let name = self.parse_enum_value_name()?;
        let directives = self.parse_const_directives()?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    /// `EnumValue : Name but not true, false or null`
    fn parse_enum_value_name(&mut self) -> ParseResult<Name> {
        let token = self.lexer.token();
        if let Some(reserved @ ("true" | "false" | "null")) = token.value.as_deref() {
            return Err(self
                .error_at(
                    token.start,
                    SyntaxErrorKind::ReservedName {
                        name: reserved.to_string(),
                    },
                    format!(
                        "{} is reserved and cannot be used for an enum value.",
                        token.description(),
                    ),
                )
                .with_note(GraphQLErrorNote::spec(ENUM_VALUES_SPEC_URL)));
        }
        self.parse_name()
    }

    /// `InputObjectTypeDefinition : Description? input Name Directives[Const]? InputFieldsDefinition?`
    fn parse_input_object_type_definition(&mut self) -> ParseResult<InputObjectTypeDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_input_fields_definition()?;
        Ok(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `InputFieldsDefinition : { InputValueDefinition+ }`
    fn parse_input_fields_definition(&mut self) -> ParseResult<Vec<InputValueDefinition>> {
        self.optional_many(
            TokenKind::CurlyBraceOpen,
            Self::parse_input_value_def,
            TokenKind::CurlyBraceClose,
        )
    }

    /// ```text
    /// DirectiveDefinition :
    ///   Description? directive @ Name ArgumentsDefinition? repeatable? on DirectiveLocations
    /// ```
    fn parse_directive_definition(&mut self) -> ParseResult<DirectiveDefinition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        let repeatable = self.expect_optional_keyword("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            loc: self.loc(start),
        })
    }

    /// `DirectiveLocations : |? DirectiveLocation (| DirectiveLocation)*`
    fn parse_directive_locations(&mut self) -> ParseResult<Vec<Name>> {
        self.delimited_many(TokenKind::Pipe, Self::parse_directive_location)
    }

    /// A name from the closed [`DirectiveLocation`] set.
    fn parse_directive_location(&mut self) -> ParseResult<Name> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        if DirectiveLocation::from_name(&name.value).is_some() {
            return Ok(name);
        }
        Err(self.unexpected_at(start))
    }

    // =========================================================================
    // Type system extensions
    // =========================================================================

    /// Dispatches `extend <keyword>` on the keyword after `extend`.
    fn parse_type_system_extension(&mut self) -> ParseResult<Definition> {
        let keyword_token = self.lexer.lookahead()?.clone();
        if keyword_token.kind == TokenKind::Name {
            match keyword_token.value.as_deref().unwrap_or_default() {
                "schema" => {
                    return self.parse_schema_extension().map(Definition::SchemaExtension);
                },
                "scalar" => {
                    return self
                        .parse_scalar_type_extension()
                        .map(Definition::ScalarTypeExtension);
                },
                "type" => {
                    return self
                        .parse_object_type_extension()
                        .map(Definition::ObjectTypeExtension);
                },
                "interface" => {
                    return self
                        .parse_interface_type_extension()
                        .map(Definition::InterfaceTypeExtension);
                },
                "union" => {
                    return self
                        .parse_union_type_extension()
                        .map(Definition::UnionTypeExtension);
                },
                "enum" => {
                    return self
                        .parse_enum_type_extension()
                        .map(Definition::EnumTypeExtension);
                },
                "input" => {
                    return self
                        .parse_input_object_type_extension()
                        .map(Definition::InputObjectTypeExtension);
                },
                _ => (),
            }
        }
        Err(self.unexpected_token(&keyword_token))
    }

    /// `SchemaExtension : extend schema Directives[Const]? { OperationTypeDefinition+ }`
    /// (at least one of the two must be present)
    fn parse_schema_extension(&mut self) -> ParseResult<SchemaExtension> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("schema")?;
        let directives = self.parse_const_directives()?;
        let operation_types = self.optional_many(
            TokenKind::CurlyBraceOpen,
            Self::parse_operation_type_definition,
            TokenKind::CurlyBraceClose,
        )?;
        if directives.is_empty() && operation_types.is_empty() {
            return Err(self.unexpected());
        }
        Ok(SchemaExtension {
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    fn parse_scalar_type_extension(&mut self) -> ParseResult<ScalarTypeExtension> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        if directives.is_empty() {
            return Err(self.unexpected());
        }
        Ok(ScalarTypeExtension {
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_object_type_extension(&mut self) -> ParseResult<ObjectTypeExtension> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected());
        }
        Ok(ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_interface_type_extension(&mut self) -> ParseResult<InterfaceTypeExtension> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected());
        }
        Ok(InterfaceTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_union_type_extension(&mut self) -> ParseResult<UnionTypeExtension> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let types = self.parse_union_member_types()?;
        if directives.is_empty() && types.is_empty() {
            return Err(self.unexpected());
        }
        Ok(UnionTypeExtension {
            name,
            directives,
            types,
            loc: self.loc(start),
        })
    }

    fn parse_enum_type_extension(&mut self) -> ParseResult<EnumTypeExtension> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let values = self.parse_enum_values_definition()?;
        if directives.is_empty() && values.is_empty() {
            return Err(self.unexpected());
        }
        Ok(EnumTypeExtension {
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    fn parse_input_object_type_extension(&mut self) -> ParseResult<InputObjectTypeExtension> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_input_fields_definition()?;
        if directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected());
        }
        Ok(InputObjectTypeExtension {
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }
}
