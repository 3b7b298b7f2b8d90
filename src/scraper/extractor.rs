//! Fetches the board index, the per-board catalogs and the thread posts from
//! the JSON API and maps them into plain data.
//!
//! All operations return a [`ScrapeError`] and leave the catch-log-skip policy
//! to the caller; no request is ever retried.
use log::debug;
use reqwest::Client;

use super::error::ScrapeError;
use super::models::{BoardList, Catalog, ThreadPage, ThreadRef};
use super::sanitize::clean_comment;
use super::{Site, BROWSER_UA};
use crate::client;

/// Closing sequence of a quote-reply block. Only the text after the last one
/// is the post's own.
const QUOTE_DELIMITER: &str = "</a><br>";

/// Main object to query the imageboard API.
#[derive(Debug)]
pub struct Extractor {
    client: Client,
    site: Site,
}

impl Extractor {
    /// Sets up the extractor with a shared client carrying the browser User-Agent.
    pub fn new(site: Site) -> Result<Self, ScrapeError> {
        let client = client!(BROWSER_UA)?;

        Ok(Self { client, site })
    }

    /// Lists every board id found in the site index.
    pub async fn boards(&self) -> Result<Vec<String>, ScrapeError> {
        debug!("Fetching board index from {}", self.site.index_url());

        let list = self
            .client
            .get(self.site.index_url())
            .send()
            .await?
            .error_for_status()?
            .json::<BoardList>()
            .await?;

        debug!("Found {} boards", list.boards.len());
        Ok(list.boards.into_iter().map(|board| board.id).collect())
    }

    /// Lists all active threads of a single board, whatever the catalog returns.
    pub async fn catalog(&self, board: &str) -> Result<Vec<ThreadRef>, ScrapeError> {
        debug!("Fetching catalog for /{}/", board);

        let catalog = self
            .client
            .get(self.site.catalog_url(board))
            .send()
            .await?
            .error_for_status()?
            .json::<Catalog>()
            .await?;

        Ok(catalog
            .threads
            .into_iter()
            .map(|thread| ThreadRef {
                board: board.to_string(),
                num: thread.num,
            })
            .collect())
    }

    /// Walks all boards sequentially and collects every thread to fetch.
    ///
    /// A board whose catalog request fails contributes nothing; the remaining
    /// boards are unaffected.
    pub async fn collect_threads(&self, boards: &[String]) -> Vec<ThreadRef> {
        let mut refs = Vec::new();

        for board in boards {
            println!("Getting threads from {}...", board);

            match self.catalog(board).await {
                Ok(threads) => refs.extend(threads),
                Err(e) => println!("Error fetching catalog for {}: {}", board, e),
            }
        }

        refs
    }

    /// Fetches one thread and returns its cleaned post bodies in API order.
    ///
    /// Posts whose text is empty after quote stripping and cleanup contribute
    /// nothing. A page without thread objects is an invalid response.
    pub async fn thread_posts(&self, thread: &ThreadRef) -> Result<Vec<String>, ScrapeError> {
        debug!("Fetching thread {} from {}", thread.num, thread.board);

        let page = self
            .client
            .get(self.site.thread_url(thread))
            .send()
            .await?
            .error_for_status()?
            .json::<ThreadPage>()
            .await?;

        let posts = match page.threads.into_iter().next() {
            Some(first) => first.posts,
            None => return Err(ScrapeError::InvalidServerResponse),
        };

        let cleaned = posts
            .iter()
            .filter_map(|post| {
                let own_text = post
                    .comment
                    .rsplit(QUOTE_DELIMITER)
                    .next()
                    .unwrap_or(&post.comment);

                let text = clean_comment(own_text);
                (!text.is_empty()).then_some(text)
            })
            .collect();

        Ok(cleaned)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn extractor_for(server: &MockServer) -> Extractor {
        Extractor::new(Site::new(server.base_url())).unwrap()
    }

    #[tokio::test]
    async fn lists_board_ids() {
        let server = MockServer::start();
        let index = server.mock(|when, then| {
            when.method(GET).path("/index.json");
            then.status(200).json_body(json!({
                "boards": [
                    { "id": "b", "name": "Random" },
                    { "id": "pr", "name": "Programming" }
                ]
            }));
        });

        let boards = extractor_for(&server).boards().await.unwrap();

        index.assert();
        assert_eq!(boards, vec!["b".to_string(), "pr".to_string()]);
    }

    #[tokio::test]
    async fn missing_boards_key_parses_as_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/index.json");
            then.status(200).json_body(json!({}));
        });

        let boards = extractor_for(&server).boards().await.unwrap();
        assert!(boards.is_empty());
    }

    #[tokio::test]
    async fn catalog_pairs_threads_with_their_board() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/b/catalog.json");
            then.status(200).json_body(json!({
                "threads": [ { "num": 100 }, { "num": 200 } ]
            }));
        });

        let threads = extractor_for(&server).catalog("b").await.unwrap();

        assert_eq!(
            threads,
            vec![
                ThreadRef {
                    board: "b".to_string(),
                    num: 100,
                },
                ThreadRef {
                    board: "b".to_string(),
                    num: 200,
                },
            ]
        );
    }

    #[tokio::test]
    async fn failing_board_does_not_affect_the_others() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/broken/catalog.json");
            then.status(500);
        });
        server.mock(|when, then| {
            when.method(GET).path("/ok/catalog.json");
            then.status(200).json_body(json!({ "threads": [ { "num": 7 } ] }));
        });

        let boards = vec!["broken".to_string(), "ok".to_string()];
        let threads = extractor_for(&server).collect_threads(&boards).await;

        assert_eq!(
            threads,
            vec![ThreadRef {
                board: "ok".to_string(),
                num: 7,
            }]
        );
    }

    #[tokio::test]
    async fn thread_posts_are_split_and_cleaned() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/b/res/1.json");
            then.status(200).json_body(json!({
                "threads": [ { "posts": [
                    { "comment": "quote</a><br>hello <b>world</b>" },
                    { "comment": "no delimiter here" },
                    { "comment": "" }
                ] } ]
            }));
        });

        let posts = extractor_for(&server)
            .thread_posts(&ThreadRef {
                board: "b".to_string(),
                num: 1,
            })
            .await
            .unwrap();

        assert_eq!(
            posts,
            vec!["hello world".to_string(), "no delimiter here".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_comment_field_defaults_to_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/b/res/2.json");
            then.status(200).json_body(json!({
                "threads": [ { "posts": [ { "num": 2 } ] } ]
            }));
        });

        let posts = extractor_for(&server)
            .thread_posts(&ThreadRef {
                board: "b".to_string(),
                num: 2,
            })
            .await
            .unwrap();

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn page_without_threads_is_invalid() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/b/res/3.json");
            then.status(200).json_body(json!({ "threads": [] }));
        });

        let result = extractor_for(&server)
            .thread_posts(&ThreadRef {
                board: "b".to_string(),
                num: 3,
            })
            .await;

        assert!(matches!(result, Err(ScrapeError::InvalidServerResponse)));
    }
}
