use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};

/// Characters deleted from a line before it is split into words.
pub const PUNCTUATION: [char; 8] = ['.', ',', '"', '\'', '!', ';', ':', '?'];

lazy_static! {
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// Reduce a single lowercase word to its stem.
///
/// The Snowball stemmer is reapplied until its output stops changing ("lease" -> "leas" ->
/// "lea"), so a stem always stems to itself. Each pass keeps or shortens the word.
pub fn stem(word: &str) -> String {
    let mut current = STEMMER.stem(word).into_owned();
    loop {
        let next = STEMMER.stem(&current).into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Tokenize one line: lowercase, trim, delete punctuation, split on whitespace and stem.
pub fn tokenize(line: &str) -> Vec<String> {
    let cleaned: String = line
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();
    cleaned.split_whitespace().map(stem).collect()
}

/// Tokenize every line in order and concatenate the results.
pub fn tokenize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .flat_map(|line| tokenize(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Running, runner's run!");
        assert_eq!(t.first().map(String::as_str), Some("run"));
        assert!(t.iter().all(|w| !w.contains(',') && !w.contains('!')));
    }

    #[test]
    fn fused_punctuation_is_deleted_not_split() {
        assert_eq!(tokenize("o'er"), vec![stem("oer")]);
        assert_eq!(tokenize("love:hate"), vec![stem("lovehate")]);
    }

    #[test]
    fn empty_and_blank_lines_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize_lines(Vec::<String>::new()).is_empty());
    }
}
