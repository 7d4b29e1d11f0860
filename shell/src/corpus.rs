use anyhow::{anyhow, bail, Context, Result};
use reqwest::Client;
use sonnets_core::{RawSonnetRecord, Sonnet};
use std::fs;
use std::path::Path;

pub const DEFAULT_CORPUS_URL: &str = "https://poetrydb.org/author,title/Shakespeare;Sonnet";

/// What to do with records whose title is not `"Sonnet <N>: <title>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Keep them, so the index build fails loudly.
    #[default]
    Abort,
    Skip,
}

/// Parse the poetry service's JSON payload into raw records.
pub fn parse_corpus(body: &str) -> Result<Vec<RawSonnetRecord>> {
    let json: serde_json::Value = serde_json::from_str(body).context("corpus is not valid JSON")?;
    match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                serde_json::from_value::<RawSonnetRecord>(v)
                    .with_context(|| format!("corpus record {i}"))
            })
            .collect(),
        serde_json::Value::Object(obj) => {
            if obj.contains_key("status") && !obj.contains_key("title") {
                let reason = obj.get("reason").and_then(|r| r.as_str()).unwrap_or("unknown");
                return Err(anyhow!("corpus service returned status {}: {reason}", obj["status"]));
            }
            let record = serde_json::from_value(serde_json::Value::Object(obj))
                .context("corpus record 0")?;
            Ok(vec![record])
        }
        other => bail!("unexpected corpus payload: {other}"),
    }
}

pub fn load_corpus_file<P: AsRef<Path>>(path: P) -> Result<Vec<RawSonnetRecord>> {
    let path = path.as_ref();
    let body = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let records = parse_corpus(&body)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded corpus file");
    Ok(records)
}

pub async fn fetch_corpus(client: &Client, url: &str) -> Result<Vec<RawSonnetRecord>> {
    let resp = client.get(url).send().await.with_context(|| format!("fetching {url}"))?;
    let status = resp.status();
    if !status.is_success() {
        bail!("fetching {url}: HTTP {status}");
    }
    let body = resp.text().await?;
    let records = parse_corpus(&body)?;
    tracing::info!(url, records = records.len(), "fetched corpus");
    Ok(records)
}

pub fn apply_policy(
    records: Vec<RawSonnetRecord>,
    policy: MalformedPolicy,
) -> Vec<RawSonnetRecord> {
    match policy {
        MalformedPolicy::Abort => records,
        MalformedPolicy::Skip => records
            .into_iter()
            .filter(|r| match Sonnet::new(&r.title, Vec::new()) {
                Ok(_) => true,
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed record");
                    false
                }
            })
            .collect(),
    }
}
