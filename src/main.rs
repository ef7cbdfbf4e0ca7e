//! Demo driver for the recommendation engine.
//!
//! Stands in for the surrounding service layer: loads a dataset, runs
//! one title query and prints the response the way the HTTP layer
//! would, as `{"recommendations": ...}`.

use std::env;
use std::process::ExitCode;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use readnext::{Recommendations, Recommender};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (dataset, title) = match args.as_slice() {
        [_, dataset, title] => (dataset, title),
        _ => {
            eprintln!("usage: readnext <dataset.csv> <title>");
            return ExitCode::from(2);
        }
    };

    let engine = match Recommender::load(dataset) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("readnext: {err}");
            return ExitCode::FAILURE;
        }
    };

    let response = match engine.recommend(title) {
        Recommendations::Ranked(records) => json!({ "recommendations": records }),
        Recommendations::TitleNotFound => {
            json!({ "recommendations": "Book not found in dataset." })
        }
    };
    println!("{response}");
    ExitCode::SUCCESS
}
