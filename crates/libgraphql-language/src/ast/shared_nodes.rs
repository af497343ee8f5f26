use crate::ast::Argument;
use crate::ast::Location;
use serde::Deserialize;
use serde::Serialize;

/// A GraphQL name (`/[_A-Za-z][_0-9A-Za-z]*/`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct Name {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl Name {
    /// Creates a name with no location.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            loc: None,
        }
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A directive application: `@name(arg: value)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct Directive {
    pub name: Name,

    #[serde(default)]
    pub arguments: Vec<Argument>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}
