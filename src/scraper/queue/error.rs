use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Failed to write board file: {source}")]
    FileWriteError {
        #[from]
        source: io::Error,
    },
}
