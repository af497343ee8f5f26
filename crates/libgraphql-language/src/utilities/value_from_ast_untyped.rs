use crate::ast::Value;
use crate::utilities::UntypedValue;
use crate::utilities::Variables;
use indexmap::IndexMap;

/// Converts a value literal to an [`UntypedValue`] without consulting any
/// schema type.
///
/// | literal | result |
/// |---|---|
/// | `null` | `Null` |
/// | Int | `Int`, or `Float` if it does not fit in an `i64` |
/// | Float | `Float` |
/// | String, Enum | `String` |
/// | Boolean | `Boolean` |
/// | List | `List`, element by element |
/// | Object | `Object`; a repeated field name keeps its first position and takes the later value |
/// | Variable | the entry in `variables`, or `Undefined` if there is none |
///
/// ```
/// use libgraphql_language::ParseOptions;
/// use libgraphql_language::UntypedValue;
/// use libgraphql_language::parse_value;
/// use libgraphql_language::value_from_ast_untyped;
///
/// let value = parse_value("[1, 2.5, ENUM]", ParseOptions::default()).unwrap();
/// assert_eq!(
///     value_from_ast_untyped(&value, None),
///     UntypedValue::List(vec![
///         UntypedValue::Int(1),
///         UntypedValue::Float(2.5),
///         UntypedValue::String("ENUM".to_string()),
///     ]),
/// );
/// ```
pub fn value_from_ast_untyped(value: &Value, variables: Option<&Variables>) -> UntypedValue {
    match value {
        Value::Null(_) => UntypedValue::Null,
        Value::Int(int) => match int.value.parse::<i64>() {
            Ok(parsed) => UntypedValue::Int(parsed),
            Err(_) => UntypedValue::Float(parse_float(&int.value)),
        },
        Value::Float(float) => UntypedValue::Float(parse_float(&float.value)),
        Value::String(string) => UntypedValue::String(string.value.clone()),
        Value::Enum(enum_value) => UntypedValue::String(enum_value.value.clone()),
        Value::Boolean(boolean) => UntypedValue::Boolean(boolean.value),
        Value::List(list) => UntypedValue::List(
            list.values
                .iter()
                .map(|item| value_from_ast_untyped(item, variables))
                .collect(),
        ),
        Value::Object(object) => {
            let mut fields = IndexMap::with_capacity(object.fields.len());
            for field in &object.fields {
                fields.insert(
                    field.name.value.clone(),
                    value_from_ast_untyped(&field.value, variables),
                );
            }
            UntypedValue::Object(fields)
        },
        Value::Variable(variable) => variables
            .and_then(|variables| variables.get(&variable.name.value))
            .cloned()
            .unwrap_or(UntypedValue::Undefined),
    }
}

fn parse_float(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}
