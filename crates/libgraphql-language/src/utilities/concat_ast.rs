use crate::ast::Document;

/// Combines the definitions of several documents, in order, into one
/// document. The result has no location.
pub fn concat_ast(documents: &[Document]) -> Document {
    Document {
        definitions: documents
            .iter()
            .flat_map(|document| document.definitions.iter().cloned())
            .collect(),
        loc: None,
    }
}
