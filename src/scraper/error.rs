use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Imageboard returned an invalid response")]
    InvalidServerResponse,

    #[error("Connection Error")]
    ConnectionError(#[from] reqwest::Error),
}
