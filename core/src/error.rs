use crate::DocId;
use thiserror::Error;

/// Failures raised while turning corpus records into indexable sonnets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("title {title:?} does not match \"Sonnet <N>: <title>\"")]
    MalformedTitle { title: String },
    #[error("title {title:?} does not carry a positive 32-bit sonnet number")]
    InvalidId { title: String },
    #[error("sonnet {id} appears more than once in the corpus")]
    DuplicateId { id: DocId },
}
