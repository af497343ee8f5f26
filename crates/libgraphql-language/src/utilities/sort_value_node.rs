use crate::ast::ListValue;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::Value;
use crate::utilities::natural_compare;

/// Returns a copy of `value` with the fields of every object value sorted
/// by name (using [`natural_compare()`]), at any depth.
///
/// List element order is kept. Fields with the same name keep their
/// relative order. Locations are copied unchanged.
pub fn sort_value_node(value: &Value) -> Value {
    match value {
        Value::Object(object) => Value::Object(ObjectValue {
            fields: sort_fields(&object.fields),
            loc: object.loc.clone(),
        }),
        Value::List(list) => Value::List(ListValue {
            values: list.values.iter().map(sort_value_node).collect(),
            loc: list.loc.clone(),
        }),
        Value::Variable(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Boolean(_)
        | Value::Null(_)
        | Value::Enum(_) => value.clone(),
    }
}

fn sort_fields(fields: &[ObjectField]) -> Vec<ObjectField> {
    let mut sorted: Vec<ObjectField> = fields
        .iter()
        .map(|field| ObjectField {
            name: field.name.clone(),
            value: sort_value_node(&field.value),
            loc: field.loc.clone(),
        })
        .collect();
    sorted.sort_by(|a, b| natural_compare(&a.name.value, &b.name.value));
    sorted
}
