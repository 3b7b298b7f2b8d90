//! # Imageboard Scraper
//!
//! imageboard_scraper is a CLI utility to dump the text of every active thread of an
//! imageboard into per-board plaintext files.
//!
//! One run enumerates all boards from the site index, walks each board's catalog and
//! then fetches every thread concurrently, stripping the markup out of each comment
//! before writing the results into a timestamped directory.
pub mod scraper;
mod progress_bars;

// Export main worker queue
pub use scraper::queue::{DumpSummary, Queue};

// Export the API extractor
pub use scraper::extractor::Extractor;

pub use scraper::Site;

pub use scraper::models::ThreadRef;
