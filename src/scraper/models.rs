//! Serde models for the three API documents the scraper reads.
//!
//! Only the fields the dump actually uses are declared, everything else in the
//! responses is ignored. Collections default to empty so a document missing its
//! list key parses instead of failing the whole stage.
use serde::Deserialize;

/// Schema of `/index.json`.
#[derive(Debug, Deserialize)]
pub struct BoardList {
    #[serde(default)]
    pub boards: Vec<BoardInfo>,
}

#[derive(Debug, Deserialize)]
pub struct BoardInfo {
    pub id: String,
}

/// Schema of `/<board>/catalog.json`.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub threads: Vec<CatalogThread>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogThread {
    pub num: u64,
}

/// Schema of `/<board>/res/<num>.json`. The posts live in the first element
/// of the `threads` array.
#[derive(Debug, Deserialize)]
pub struct ThreadPage {
    #[serde(default)]
    pub threads: Vec<ThreadPosts>,
}

#[derive(Debug, Deserialize)]
pub struct ThreadPosts {
    #[serde(default)]
    pub posts: Vec<ThreadPost>,
}

#[derive(Debug, Deserialize)]
pub struct ThreadPost {
    #[serde(default)]
    pub comment: String,
}

/// A (board, thread id) pair collected from a catalog and consumed once by the
/// fetch stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRef {
    pub board: String,
    pub num: u64,
}
