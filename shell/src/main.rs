use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use sonnets_core::Index;
use sonnets_shell::{
    apply_policy, fetch_corpus, load_corpus_file, run_queries, run_repl, MalformedPolicy,
    OutputFormat, DEFAULT_CORPUS_URL,
};
use std::io;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "sonnets")]
#[command(about = "Boolean-AND search over Shakespeare's sonnets", long_about = None)]
struct Args {
    /// Load the corpus from a local JSON file instead of fetching it
    #[arg(long)]
    corpus: Option<String>,
    /// Corpus URL (defaults to $SONNETS_CORPUS_URL, then the public poetry service)
    #[arg(long)]
    url: Option<String>,
    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,
    /// Drop records whose title does not parse instead of failing
    #[arg(long, default_value_t = false)]
    skip_malformed: bool,
    /// Print one JSON object per query
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Answer these queries and exit instead of reading stdin
    #[arg(long = "query")]
    queries: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let records = match &args.corpus {
        Some(path) => load_corpus_file(path)?,
        None => {
            let url = args
                .url
                .clone()
                .or_else(|| std::env::var("SONNETS_CORPUS_URL").ok())
                .unwrap_or_else(|| DEFAULT_CORPUS_URL.to_string());
            let client = Client::builder().timeout(Duration::from_secs(args.timeout_secs)).build()?;
            fetch_corpus(&client, &url).await?
        }
    };
    let policy = if args.skip_malformed { MalformedPolicy::Skip } else { MalformedPolicy::Abort };
    let index = Index::build(apply_policy(records, policy)).context("building index")?;

    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
    let served = if args.queries.is_empty() {
        tokio::task::spawn_blocking(move || {
            run_repl(&index, io::stdin().lock(), io::stdout().lock(), format)
        })
        .await??
    } else {
        run_queries(&index, &args.queries, io::stdout().lock(), format)?
    };
    tracing::info!(served, "done");
    Ok(())
}
