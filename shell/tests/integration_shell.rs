use sonnets_core::{Index, ParseError};
use sonnets_shell::{
    apply_policy, load_corpus_file, run_queries, run_repl, MalformedPolicy, OutputFormat,
};
use std::fs;
use tempfile::tempdir;

const CORPUS: &str = r#"[
  {"title": "Sonnet 18: Shall I compare thee to a summer's day?", "author": "William Shakespeare",
   "lines": ["Shall I compare thee to a summer's day?", "Thou art more lovely and more temperate:",
             "Rough winds do shake the darling buds of May,"], "linecount": "3"},
  {"title": "Sonnet 116: Let me not to the marriage of true minds", "author": "William Shakespeare",
   "lines": ["Let me not to the marriage of true minds", "Admit impediments. Love is not love"], "linecount": "2"},
  {"title": "Sonnet 130: My mistress' eyes are nothing like the sun", "author": "William Shakespeare",
   "lines": ["My mistress' eyes are nothing like the sun;", "Coral is far more red than her lips' red;"], "linecount": "2"}
]"#;

fn write_corpus(body: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sonnets.json");
    fs::write(&path, body).unwrap();
    (dir, path)
}

#[test]
fn file_corpus_answers_and_queries() {
    let (_dir, path) = write_corpus(CORPUS);
    let index = Index::build(load_corpus_file(&path).unwrap()).unwrap();
    assert_eq!(index.len(), 3);

    let ids = |q: &str| index.search(q).iter().map(|s| s.id).collect::<Vec<_>>();
    assert_eq!(ids("more"), vec![18, 130]);
    assert_eq!(ids("more lovely"), vec![18]);
    assert_eq!(ids("loving"), vec![18, 116]);
    assert!(ids("love sun").is_empty());
    assert!(ids("?!").is_empty());
}

#[test]
fn repl_session_over_file_corpus() {
    let (_dir, path) = write_corpus(CORPUS);
    let index = Index::build(load_corpus_file(&path).unwrap()).unwrap();
    let mut out = Vec::new();
    let input = "true minds\nnowhere\nq\n".as_bytes();
    let served = run_repl(&index, input, &mut out, OutputFormat::Text).unwrap();
    assert_eq!(served, 2);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Matching Sonnet IDs: [116]"));
    assert!(text.contains("Your search for 'true minds' matched 1 sonnets:"));
    assert!(text.contains("\nSonnet 116: Let me not to the marriage of true minds\n"));
    assert!(text.contains("No matching sonnets found."));
}

#[test]
fn batch_queries_emit_json_lines() {
    let (_dir, path) = write_corpus(CORPUS);
    let index = Index::build(load_corpus_file(&path).unwrap()).unwrap();
    let mut out = Vec::new();
    let queries = vec!["eyes".to_string(), "".to_string()];
    run_queries(&index, &queries, &mut out, OutputFormat::Json).unwrap();
    let lines: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["ids"], serde_json::json!([130]));
    assert_eq!(lines[1]["ids"], serde_json::json!([]));
}

#[test]
fn malformed_record_policy() {
    let body = r#"[{"title": "Sonnet 1: From fairest creatures", "lines": ["we desire increase"]},
                   {"title": "A Lover's Complaint", "lines": ["from off a hill"]}]"#;
    let (_dir, path) = write_corpus(body);
    let records = load_corpus_file(&path).unwrap();

    let err = Index::build(apply_policy(records.clone(), MalformedPolicy::Abort)).unwrap_err();
    assert!(matches!(err, ParseError::MalformedTitle { .. }));

    let index = Index::build(apply_policy(records, MalformedPolicy::Skip)).unwrap();
    assert_eq!(index.len(), 1);
    assert!(index.search("hill").is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_corpus_file(dir.path().join("absent.json")).is_err());
}
