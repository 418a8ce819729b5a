pub mod loader;
pub mod repl;
pub mod server;
pub mod trie;

pub use loader::{load_file, load_words, LoadError};
pub use trie::Trie;
