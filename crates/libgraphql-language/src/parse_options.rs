use serde::Deserialize;

/// Configuration for [`parse()`](crate::parse) and the other parser entry
/// points.
///
/// Deserializable with every field optional, so a host application can
/// embed it in its own configuration file:
///
/// ```
/// use libgraphql_language::ParseOptions;
///
/// let options: ParseOptions = serde_json::from_str(r#"{"max_tokens": 2000}"#).unwrap();
/// assert_eq!(options.max_tokens, Some(2000));
/// assert_eq!(options.max_nesting_depth, ParseOptions::DEFAULT_MAX_NESTING_DEPTH);
/// assert!(!options.no_location);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParseOptions {
    /// Leave `loc` unset on every parsed node. Useful when trees are
    /// compared or snapshotted.
    pub no_location: bool,

    /// Accept the deprecated `fragment Name($var: Type) on T { ... }` form.
    pub allow_legacy_fragment_variables: bool,

    /// Abort with a syntax error once the document holds more than this
    /// many significant tokens (`<EOF>` excluded). `None` disables the
    /// limit.
    pub max_tokens: Option<usize>,

    /// Abort with a syntax error once selection sets, values, or list types
    /// nest deeper than this. Each level costs parser stack, so raising it
    /// far past the default can overflow the stack on hostile input.
    pub max_nesting_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            no_location: false,
            allow_legacy_fragment_variables: false,
            max_tokens: None,
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_no_location(mut self, no_location: bool) -> Self {
        self.no_location = no_location;
        self
    }

    pub fn with_legacy_fragment_variables(mut self, allow: bool) -> Self {
        self.allow_legacy_fragment_variables = allow;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }
}
