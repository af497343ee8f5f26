use indexmap::IndexMap;

/// Variable values supplied alongside a document, by variable name.
pub type Variables = IndexMap<String, UntypedValue>;

/// A host value converted from a value literal without reference to any
/// schema type. See [`value_from_ast_untyped()`](crate::value_from_ast_untyped).
#[derive(Clone, Debug, PartialEq)]
pub enum UntypedValue {
    /// No value at all: a variable that was not supplied. Distinct from
    /// [`UntypedValue::Null`].
    Undefined,
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<UntypedValue>),

    /// Keys keep the order fields first appeared in.
    Object(IndexMap<String, UntypedValue>),
}

impl UntypedValue {
    pub fn is_undefined(&self) -> bool {
        matches!(self, UntypedValue::Undefined)
    }

    /// Converts to JSON. `Undefined` has no JSON form: it yields `None` at
    /// the top level, is dropped from objects, and becomes `null` inside
    /// lists.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        Some(match self {
            UntypedValue::Undefined => return None,
            UntypedValue::Null => serde_json::Value::Null,
            UntypedValue::Boolean(value) => serde_json::Value::Bool(*value),
            UntypedValue::Int(value) => serde_json::Value::from(*value),
            UntypedValue::Float(value) => serde_json::Number::from_f64(*value)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            UntypedValue::String(value) => serde_json::Value::String(value.clone()),
            UntypedValue::List(values) => serde_json::Value::Array(
                values
                    .iter()
                    .map(|value| value.to_json().unwrap_or(serde_json::Value::Null))
                    .collect(),
            ),
            UntypedValue::Object(fields) => serde_json::Value::Object(
                fields
                    .iter()
                    .filter_map(|(key, value)| Some((key.clone(), value.to_json()?)))
                    .collect(),
            ),
        })
    }
}

impl From<&serde_json::Value> for UntypedValue {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => UntypedValue::Null,
            serde_json::Value::Bool(value) => UntypedValue::Boolean(*value),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => UntypedValue::Int(int),
                None => UntypedValue::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(value) => UntypedValue::String(value.clone()),
            serde_json::Value::Array(values) => {
                UntypedValue::List(values.iter().map(UntypedValue::from).collect())
            },
            serde_json::Value::Object(fields) => UntypedValue::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), UntypedValue::from(value)))
                    .collect(),
            ),
        }
    }
}
