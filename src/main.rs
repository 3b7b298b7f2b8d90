use anyhow::Error;
use chrono::Local;
use colored::Colorize;
use imageboard_scraper::{Extractor, Queue, Site};
use log::debug;
use std::path::PathBuf;
use std::thread::available_parallelism;
use tokio::fs::create_dir_all;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::builder().format_timestamp(None).init();

    let output_dir =
        PathBuf::from("storage").join(Local::now().format("%Y%m%d_%H%M%S").to_string());
    create_dir_all(&output_dir).await?;
    println!(
        "Output directory: {}",
        output_dir.display().to_string().bold().blue()
    );

    let extractor = Extractor::new(Site::default())?;

    // Network failures never abort the run, they only shrink it.
    let boards = match extractor.boards().await {
        Ok(boards) => boards,
        Err(e) => {
            println!("Error getting boards: {}", e);
            Vec::new()
        }
    };

    let threads = extractor.collect_threads(&boards).await;
    println!(
        "Total threads to fetch: {}",
        threads.len().to_string().bold().blue()
    );

    let sim_fetches = available_parallelism().map_or(4, |n| n.get());
    debug!("Using {} simultaneous fetches", sim_fetches);

    let queue = Queue::new(extractor, threads, sim_fetches);
    let summary = queue.dump(&output_dir).await?;

    println!(
        "{} {} {} {} {}",
        summary.posts_written.to_string().bold().blue(),
        "posts saved across".bold(),
        summary.files_written.to_string().bold().blue(),
        "board files in".bold(),
        output_dir.display().to_string().bold().blue()
    );

    Ok(())
}
