use crate::error::ParseError;
use crate::tokenizer::tokenize_lines;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type DocId = u32;

lazy_static! {
    static ref TITLE_RE: Regex = Regex::new(r"^Sonnet (\d+): (.+)").expect("valid regex");
}

/// Anything that can be broken into index tokens.
pub trait Document {
    fn lines(&self) -> &[String];

    fn tokenize(&self) -> Vec<String> {
        tokenize_lines(self.lines())
    }
}

/// A corpus record as handed over by the loader, before its title is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSonnetRecord {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

impl RawSonnetRecord {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self { title: title.into(), lines }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sonnet {
    id: DocId,
    title: String,
    lines: Vec<String>,
}

impl Sonnet {
    /// Parse `"Sonnet <N>: <title>"` and attach the poem's lines.
    pub fn new(title_field: &str, lines: Vec<String>) -> Result<Self, ParseError> {
        let (id, title) = parse_title(title_field)?;
        Ok(Self { id, title, lines })
    }

    pub fn from_record(record: RawSonnetRecord) -> Result<Self, ParseError> {
        Self::new(&record.title, record.lines)
    }

    pub fn id(&self) -> DocId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn view(&self) -> SonnetView<'_> {
        SonnetView { id: self.id, title: &self.title, lines: &self.lines }
    }
}

impl Document for Sonnet {
    fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Sonnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.view().fmt(f)
    }
}

fn parse_title(field: &str) -> Result<(DocId, String), ParseError> {
    let caps = TITLE_RE
        .captures(field)
        .ok_or_else(|| ParseError::MalformedTitle { title: field.to_string() })?;
    let id = caps[1]
        .parse::<DocId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ParseError::InvalidId { title: field.to_string() })?;
    Ok((id, caps[2].to_string()))
}

/// Free-text search input, tokenized exactly like a one-line document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    lines: [String; 1],
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { lines: [text.into()] }
    }

    pub fn text(&self) -> &str {
        &self.lines[0]
    }
}

impl Document for Query {
    fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Borrowed, render-ready view of a sonnet returned from a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SonnetView<'a> {
    pub id: DocId,
    pub title: &'a str,
    pub lines: &'a [String],
}

impl fmt::Display for SonnetView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\nSonnet {}: {}\n{}", self.id, self.title, self.lines.join("\n"))
    }
}
