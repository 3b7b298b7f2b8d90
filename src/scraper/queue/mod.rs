//! Queue used to fetch, group and save the posts of every thread collected
//! from the catalogs.
//!
//! # Example usage
//!
//! ```no_run
//! use imageboard_scraper::{Extractor, Queue, Site};
//! use std::path::Path;
//!
//! async fn dump_everything() {
//!     let extractor = Extractor::new(Site::default()).unwrap();
//!
//!     let boards = extractor.boards().await.unwrap();
//!
//!     let threads = extractor.collect_threads(&boards).await;
//!
//!     let sf = 8; // Number of simultaneous thread fetches.
//!
//!     let queue = Queue::new(extractor, threads, sf);
//!
//!     queue.dump(Path::new("storage/run")).await.unwrap();
//! }
//! ```
use ahash::AHashMap;
use colored::Colorize;
use futures::StreamExt;
use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs;

use self::error::QueueError;
use super::extractor::Extractor;
use super::models::ThreadRef;
use crate::progress_bars::ProgressArcs;

pub mod error;

/// Totals of a finished run.
#[derive(Debug, Default)]
pub struct DumpSummary {
    /// Post lines written across all board files.
    pub posts_written: u64,
    /// Board files created, empty ones included.
    pub files_written: u64,
}

/// Struct where all the fetching, grouping and saving takes place.
pub struct Queue {
    list: Vec<ThreadRef>,
    extractor: Extractor,
    sim_fetches: usize,
}

impl Queue {
    /// Sets up the queue for one fetch pass over all collected threads.
    pub fn new(extractor: Extractor, threads: Vec<ThreadRef>, sim_fetches: usize) -> Self {
        Self {
            list: threads,
            extractor,
            sim_fetches: sim_fetches.max(1),
        }
    }

    /// Fetches every thread, groups the cleaned posts by board and writes one
    /// `<board>.txt` file per board into `output_dir`.
    ///
    /// A thread whose fetch fails contributes an empty list; its board still
    /// gets a file. Boards that never appeared in the list get none.
    pub async fn dump(&self, output_dir: &Path) -> Result<DumpSummary, QueueError> {
        debug!("Fetching {} threads", self.list.len());

        let bars = ProgressArcs::initialize(self.list.len() as u64);

        // `buffered` keeps the results in request order, so grouping stays
        // deterministic no matter which fetch finishes first.
        let results: Vec<Vec<String>> = futures::stream::iter(&self.list)
            .map(|thread| {
                let bars = bars.clone();
                async move {
                    let posts = match self.extractor.thread_posts(thread).await {
                        Ok(posts) => posts,
                        Err(e) => {
                            println!(
                                "Error fetching thread {} on {}: {}",
                                thread.num, thread.board, e
                            );
                            Vec::new()
                        }
                    };

                    bars.main.inc(1);
                    posts
                }
            })
            .buffered(self.sim_fetches)
            .collect()
            .await;

        bars.main.finish_and_clear();

        let mut grouped: AHashMap<&str, Vec<String>> = AHashMap::new();
        for (thread, posts) in self.list.iter().zip(results) {
            grouped
                .entry(thread.board.as_str())
                .or_default()
                .extend(posts);
        }

        let mut summary = DumpSummary::default();

        for (board, posts) in &grouped {
            let path = self.save_board(output_dir, board, posts).await?;

            summary.posts_written += posts.len() as u64;
            summary.files_written += 1;

            println!(
                "{} {} {} {}",
                "Saved".bold().green(),
                posts.len().to_string().bold().blue(),
                "posts to".bold().green(),
                path.display().to_string().bold().blue()
            );
        }

        Ok(summary)
    }

    async fn save_board(
        &self,
        output_dir: &Path,
        board: &str,
        posts: &[String],
    ) -> Result<PathBuf, QueueError> {
        let path = output_dir.join(format!("{}.txt", board));

        debug!("Writing {} posts to {}", posts.len(), path.display());
        fs::write(&path, posts.join("\n")).await?;

        Ok(path)
    }
}
