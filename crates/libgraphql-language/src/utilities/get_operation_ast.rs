use crate::ast::Document;
use crate::ast::OperationDefinition;

/// Selects an operation from `document`.
///
/// With `operation_name`, returns the operation with exactly that name.
/// Without it, returns the document's only operation, or `None` when the
/// document has zero operations or more than one. Fragments and
/// type-system definitions are ignored either way.
pub fn get_operation_ast<'a>(
    document: &'a Document,
    operation_name: Option<&str>,
) -> Option<&'a OperationDefinition> {
    let mut operations = document.operations();
    match operation_name {
        Some(operation_name) => operations.find(|operation| {
            operation
                .name
                .as_ref()
                .is_some_and(|name| name.value == operation_name)
        }),
        None => {
            let operation = operations.next()?;
            match operations.next() {
                Some(_) => None,
                None => Some(operation),
            }
        },
    }
}
