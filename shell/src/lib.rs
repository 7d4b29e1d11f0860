pub mod corpus;
pub mod repl;

pub use corpus::{
    apply_policy, fetch_corpus, load_corpus_file, parse_corpus, MalformedPolicy, DEFAULT_CORPUS_URL,
};
pub use repl::{render, run_queries, run_repl, OutputFormat, PROMPT};
