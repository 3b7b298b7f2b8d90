//! Modules that turn an imageboard's JSON API into per-board plaintext dumps.
//!
//! The [`Extractor`](extractor::Extractor) lists boards and catalogs and fetches
//! thread posts, [`sanitize`] strips the markup out of each comment and the
//! [`Queue`](queue::Queue) fans the thread fetches out and writes the grouped
//! results to disk.
pub mod error;
pub mod extractor;
mod macros;
pub mod models;
pub mod queue;
pub mod sanitize;

use self::models::ThreadRef;

/// Browser User-Agent sent with every API request.
pub const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Target imageboard. Only the base URL varies, every endpoint derives from it.
#[derive(Debug, Clone)]
pub struct Site {
    base_url: String,
}

impl Default for Site {
    fn default() -> Self {
        Self::new("https://2ch.hk")
    }
}

impl Site {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Board index endpoint, lists every board of the site.
    pub fn index_url(&self) -> String {
        format!("{}/index.json", self.base_url)
    }

    /// Catalog endpoint with all active threads of a board.
    pub fn catalog_url(&self, board: &str) -> String {
        format!("{}/{}/catalog.json", self.base_url, board)
    }

    /// Full thread endpoint with all of its posts.
    pub fn thread_url(&self, thread: &ThreadRef) -> String {
        format!("{}/{}/res/{}.json", self.base_url, thread.board, thread.num)
    }
}
