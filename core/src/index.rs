use crate::document::{DocId, Document, Query, RawSonnetRecord, Sonnet, SonnetView};
use crate::error::ParseError;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Boolean-AND inverted index over a fixed corpus of sonnets.
///
/// Built once by [`Index::build`] and read-only afterwards; there is no `&mut self` API,
/// so a shared `&Index` can be queried from any number of threads.
#[derive(Debug, Default)]
pub struct Index {
    postings: HashMap<String, BTreeSet<DocId>>, // token -> ids of documents containing it
    documents: BTreeMap<DocId, Sonnet>,
}

impl Index {
    /// Parse every record and index the resulting corpus.
    ///
    /// The first malformed record aborts the build; no partial index is returned.
    pub fn build(records: Vec<RawSonnetRecord>) -> Result<Self, ParseError> {
        let sonnets = records
            .into_iter()
            .map(Sonnet::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_sonnets(sonnets)
    }

    pub fn from_sonnets(sonnets: Vec<Sonnet>) -> Result<Self, ParseError> {
        let mut index = Self::default();
        for sonnet in sonnets {
            if index.documents.contains_key(&sonnet.id()) {
                return Err(ParseError::DuplicateId { id: sonnet.id() });
            }
            index.add(&sonnet);
            index.documents.insert(sonnet.id(), sonnet);
        }
        tracing::info!(num_docs = index.len(), num_terms = index.vocabulary_len(), "built index");
        Ok(index)
    }

    // Re-adding a document only re-inserts ids already present.
    fn add(&mut self, sonnet: &Sonnet) {
        for token in sonnet.tokenize() {
            self.postings.entry(token).or_default().insert(sonnet.id());
        }
    }

    /// Documents containing every token of `text`, in ascending id order.
    pub fn search(&self, text: &str) -> Vec<SonnetView<'_>> {
        self.search_query(&Query::new(text))
    }

    pub fn search_query(&self, query: &Query) -> Vec<SonnetView<'_>> {
        let tokens = query.tokenize();
        let ids = self.matching_ids(&tokens);
        tracing::debug!(query = query.text(), tokens = tokens.len(), hits = ids.len(), "search");
        ids.into_iter()
            .filter_map(|id| self.documents.get(&id))
            .map(Sonnet::view)
            .collect()
    }

    fn matching_ids(&self, tokens: &[String]) -> BTreeSet<DocId> {
        // A query with no tokens matches nothing, not the whole corpus.
        if tokens.is_empty() {
            return BTreeSet::new();
        }
        let mut sets = Vec::with_capacity(tokens.len());
        for token in tokens {
            match self.postings.get(token) {
                Some(ids) => sets.push(ids),
                None => return BTreeSet::new(),
            }
        }
        sets.sort_by_key(|ids| ids.len());
        let Some((smallest, rest)) = sets.split_first() else {
            return BTreeSet::new();
        };
        smallest
            .iter()
            .copied()
            .filter(|id| rest.iter().all(|ids| ids.contains(id)))
            .collect()
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of distinct tokens.
    pub fn vocabulary_len(&self) -> usize {
        self.postings.len()
    }

    pub fn postings(&self, token: &str) -> Option<&BTreeSet<DocId>> {
        self.postings.get(token)
    }

    pub fn get(&self, id: DocId) -> Option<&Sonnet> {
        self.documents.get(&id)
    }

    /// All documents in ascending id order.
    pub fn documents(&self) -> impl Iterator<Item = &Sonnet> + '_ {
        self.documents.values()
    }
}
