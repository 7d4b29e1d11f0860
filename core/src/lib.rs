pub mod document;
pub mod error;
pub mod index;
pub mod tokenizer;

pub use document::{DocId, Document, Query, RawSonnetRecord, Sonnet, SonnetView};
pub use error::ParseError;
pub use index::Index;
