use std::{fs::File, net::SocketAddr, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use tokio::io::BufReader;
use tracing::info;

use wordtrie::{repl, server};

/// Prefix search over a word list.
#[derive(Parser, Debug)]
#[command(version, about = "Load a word list and find every word starting with a prefix.")]
struct Cli {
    /// Directory holding the word list.
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Word list file name, one word per line, relative to the data directory.
    #[arg(long, global = true, default_value = "words.txt")]
    words: PathBuf,

    /// Where log output is written. Logs stay off stdout so the prompt is readable.
    #[arg(long, global = true, default_value = "log.txt")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read prefixes from stdin and report match counts and timing.
    Repl(ReplArgs),
    /// Serve suggestions over HTTP.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct ReplArgs {
    /// Print the matching words after each report.
    #[arg(short, long)]
    show: bool,
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(short, long, default_value = "127.0.0.1:8000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file = File::create(&cli.log_file)?;
    tracing_subscriber::fmt().with_writer(file).init();

    // No index means nothing to serve, so a load failure ends the process.
    let trie = wordtrie::load_file(cli.data_dir.join(&cli.words)).await?;
    info!("Index ready with {} words", trie.len());

    match cli.command {
        Command::Repl(args) => {
            let stdin = BufReader::new(tokio::io::stdin());
            repl::run(&trie, stdin, tokio::io::stdout(), args.show).await
        }
        Command::Serve(args) => server::serve(args.addr, trie).await,
    }
}
