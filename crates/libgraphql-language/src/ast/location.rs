use crate::Source;
use crate::SourcePosition;
use crate::token::Token;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// The region of source text a node was parsed from.
///
/// `start` and `end` are byte offsets into [`Source::body()`]; `end` is
/// exclusive. The originating [`Source`] is shared by every location of a
/// parse. It is not serialized, so a tree rehydrated from JSON has
/// `source: None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub start: usize,
    pub end: usize,
    pub start_position: SourcePosition,
    pub end_position: SourcePosition,

    #[serde(skip)]
    pub source: Option<Arc<Source>>,
}

impl Location {
    /// Spans from the start of `start_token` to the end of `end_token`.
    pub fn new(start_token: &Token, end_token: &Token, source: &Arc<Source>) -> Self {
        Self {
            start: start_token.start,
            end: end_token.end,
            start_position: start_token.start_position(),
            end_position: end_token.end_position,
            source: Some(Arc::clone(source)),
        }
    }

    /// The exact source text this location covers, when the source is
    /// known.
    pub fn source_text(&self) -> Option<&str> {
        self.source.as_ref()?.body().get(self.start..self.end)
    }
}
