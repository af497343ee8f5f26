/// The failure of one or more resolvers.
///
/// An `Aggregate` only ever holds plain errors: merging splices nested
/// aggregates in, so failures are never nested more than one level deep.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ResolveFailure<E> {
    #[error("{0}")]
    Single(E),

    #[error("{} resolvers failed", .0.len())]
    Aggregate(Vec<E>),
}

impl<E> ResolveFailure<E> {
    /// Combines two failures into one `Aggregate`, `self`'s errors first.
    pub fn merge(self, other: ResolveFailure<E>) -> ResolveFailure<E> {
        let mut errors = self.into_errors();
        errors.extend(other.into_errors());
        ResolveFailure::Aggregate(errors)
    }

    /// The underlying errors, in order.
    pub fn errors(&self) -> &[E] {
        match self {
            ResolveFailure::Single(error) => std::slice::from_ref(error),
            ResolveFailure::Aggregate(errors) => errors,
        }
    }

    pub fn into_errors(self) -> Vec<E> {
        match self {
            ResolveFailure::Single(error) => vec![error],
            ResolveFailure::Aggregate(errors) => errors,
        }
    }

    pub fn len(&self) -> usize {
        self.errors().len()
    }

    /// `true` only for an `Aggregate` with no errors, which
    /// [`resolve_object()`](crate::resolve_object) never produces.
    pub fn is_empty(&self) -> bool {
        self.errors().is_empty()
    }
}
