use serde::Serialize;
use sonnets_core::{DocId, Index, SonnetView};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Search for sonnets ('q' to quit)> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    query: &'a str,
    ids: Vec<DocId>,
    results: &'a [SonnetView<'a>],
}

/// Write the results for one query.
pub fn render<W: Write>(
    out: &mut W,
    query: &str,
    results: &[SonnetView<'_>],
    format: OutputFormat,
) -> io::Result<()> {
    let ids: Vec<DocId> = results.iter().map(|s| s.id).collect();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &JsonResult { query, ids, results })?;
            writeln!(out)
        }
        OutputFormat::Text => {
            writeln!(out, "Matching Sonnet IDs: {ids:?}")?;
            if results.is_empty() {
                return writeln!(out, "No matching sonnets found.");
            }
            writeln!(out, "Your search for '{query}' matched {} sonnets:", results.len())?;
            for sonnet in results {
                writeln!(out, "{sonnet}")?;
            }
            Ok(())
        }
    }
}

/// Prompt, read and answer queries until `q` or end of input.
/// Returns the number of queries answered.
pub fn run_repl<R: BufRead, W: Write>(
    index: &Index,
    mut input: R,
    mut out: W,
    format: OutputFormat,
) -> io::Result<usize> {
    let mut served = 0;
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim_end_matches(['\r', '\n']);
        if query.trim().eq_ignore_ascii_case("q") {
            break;
        }
        render(&mut out, query, &index.search(query), format)?;
        served += 1;
    }
    out.flush()?;
    Ok(served)
}

/// Answer a fixed list of queries without prompting.
pub fn run_queries<W: Write>(
    index: &Index,
    queries: &[String],
    mut out: W,
    format: OutputFormat,
) -> io::Result<usize> {
    for query in queries {
        render(&mut out, query, &index.search(query), format)?;
    }
    out.flush()?;
    Ok(queries.len())
}
