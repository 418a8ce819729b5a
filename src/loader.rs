use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::trie::Trie;

/// Lines shorter than this, after trimming trailing whitespace, are not inserted.
pub const MIN_WORD_LEN: usize = 4;

/// How many lines are read between progress reports.
pub const PROGRESS_INTERVAL: usize = 50_000;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open word list {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read word list at line {}: {}", .line, .source)]
    Read { line: usize, source: std::io::Error },
}

/// Opens `path` and loads every qualifying line into a new [`Trie`].
pub async fn load_file(path: impl AsRef<Path>) -> Result<Trie, LoadError> {
    let path = path.as_ref();
    info!("Loading words from {}", path.display());
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    load_words(BufReader::new(file)).await
}

/// Reads a line-oriented word list, inserting every line that is at least
/// [`MIN_WORD_LEN`] chars long once trailing whitespace is trimmed. The word
/// stored is the line with whitespace trimmed from both ends.
///
/// Invalid UTF-8 is a read error; nothing is recovered from a partially
/// read source.
pub async fn load_words<R>(reader: R) -> Result<Trie, LoadError>
where
    R: AsyncBufRead + Unpin,
{
    let start = Instant::now();
    let mut trie = Trie::new();
    let mut lines = reader.lines();
    let mut line_count = 0;

    while let Some(line) = lines.next_line().await.map_err(|source| LoadError::Read {
        line: line_count + 1,
        source,
    })? {
        line_count += 1;

        let word = line.trim();
        if line.trim_end().chars().count() >= MIN_WORD_LEN {
            trie.insert(word);
        } else {
            debug!("Skipping short line {}: {:?}", line_count, word);
        }

        if line_count % PROGRESS_INTERVAL == 0 {
            info!("Inserting words: {} lines read", line_count);
        }
    }

    info!(
        "Inserted {} words from {} lines in {} ms",
        trie.len(),
        line_count,
        start.elapsed().as_millis()
    );

    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_filters_short_lines() {
        let _ = tracing_subscriber::fmt::try_init();

        let input: &[u8] = b"cat\ncart\r\ncarton\n\nabc \nwords\n    \n";
        let trie = load_words(input).await.unwrap();

        assert_eq!(trie.search_prefix(""), vec!["cart", "carton", "words"]);
        assert!(!trie.contains("cat"));
        assert!(!trie.contains("abc"));
    }

    #[tokio::test]
    async fn test_leading_whitespace_counts_toward_length() {
        let input: &[u8] = b"  abc\n  dog  \n ab\n";
        let trie = load_words(input).await.unwrap();

        assert_eq!(trie.search_prefix(""), vec!["abc", "dog"]);
        assert!(!trie.contains("ab"));
    }

    #[tokio::test]
    async fn test_duplicate_lines_inserted_once() {
        let input: &[u8] = b"apple\napple\napples\n";
        let trie = load_words(input).await.unwrap();

        assert_eq!(trie.len(), 2);
        assert_eq!(trie.search_prefix("app"), vec!["apple", "apples"]);
    }

    #[tokio::test]
    async fn test_no_trailing_newline() {
        let input: &[u8] = b"alpha\nbeta";
        let trie = load_words(input).await.unwrap();

        assert_eq!(trie.search_prefix(""), vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_fatal() {
        let input: &[u8] = b"valid\n\xff\xfe\xfd\xfc\n";
        let err = load_words(input).await.unwrap_err();

        assert!(matches!(err, LoadError::Read { line: 2, .. }));
    }

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let err = load_file("this/path/does/not/exist.txt")
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[tokio::test]
    async fn test_load_file() {
        let path = std::env::temp_dir().join(format!("wordtrie-load-{}.txt", std::process::id()));
        tokio::fs::write(&path, "zebra\nzealot\nzoo\n").await.unwrap();

        let trie = load_file(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(trie.search_prefix("ze"), vec!["zealot", "zebra"]);
        assert!(trie.search_prefix("zo").is_empty());
    }
}
