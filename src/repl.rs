use std::time::Instant;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::trie::Trie;

pub const PROMPT: &str = "Enter a prefix: ";

/// Repeatedly prompts for a prefix on `output`, reads it from `input` and
/// reports how many words match and how long the lookup took.
///
/// Runs until `input` is exhausted. When `show` is set, the matching words
/// are printed as well.
pub async fn run<R, W>(
    trie: &Trie,
    mut input: R,
    mut output: W,
    show: bool,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed, leaving prompt loop");
            return Ok(());
        }
        // Only the line terminator is dropped; the prefix is matched as typed.
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        let (result, elapsed) = {
            let start = Instant::now();
            let res = match std::str::from_utf8(line) {
                Ok(prefix) => trie.search_prefix(prefix),
                // No inserted word can start with bytes that are not UTF-8.
                Err(_) => Vec::new(),
            };
            (res, start.elapsed())
        };
        let millis = elapsed.as_secs_f64() * 1000.0;
        debug!(
            "Query {:?} took {} ms",
            String::from_utf8_lossy(line),
            millis
        );

        let mut report = format!("Found {} words in {} ms\n", result.len(), millis);
        if show {
            for word in &result {
                report.push_str(word);
                report.push('\n');
            }
        }
        output.write_all(report.as_bytes()).await?;
    }
}
