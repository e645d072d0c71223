//! Interactive search loop with input debounce.
//!
//! Each input line supersedes any pending query; the engine only runs after
//! the configured quiet interval elapses with no newer input. This is the
//! standard single-slot debounce: earlier pending invocations are replaced,
//! never executed. `:filter <kind>` switches the active filter and re-runs
//! the last settled query immediately; `:quit` exits.

use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};

use crate::config::Config;
use crate::loader;
use crate::present::{print_results, OutputFormat};
use crate::search::{search, SearchFilter};

pub async fn run_watch(config: &Config) -> Result<()> {
    let report = loader::load_all(config).await;
    for failure in &report.failures {
        eprintln!("warning: {}", failure.error);
    }
    let corpus = report.build_corpus();
    println!(
        "{} records loaded. Type to search, :filter <kind> to narrow, :quit to exit.",
        corpus.len()
    );

    let debounce = Duration::from_millis(config.watch.debounce_ms);
    let limit = config.retrieval.final_limit;

    let mut filter = SearchFilter::All;
    let mut pending: Option<String> = None;
    let mut last_query: Option<String> = None;
    let mut deadline = Instant::now();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(input) = line? else {
                    break; // EOF
                };
                let input = input.trim().to_string();

                if let Some(command) = input.strip_prefix(':') {
                    let mut parts = command.split_whitespace();
                    match parts.next() {
                        Some("quit") | Some("q") => break,
                        Some("filter") => match parts.next() {
                            Some(arg) => match arg.parse::<SearchFilter>() {
                                Ok(parsed) => {
                                    filter = parsed;
                                    println!("filter: {}", arg.to_lowercase());
                                    if let Some(ref query) = last_query {
                                        print_results(
                                            &search(&corpus, query, filter, limit),
                                            OutputFormat::Text,
                                        );
                                    }
                                }
                                Err(message) => eprintln!("{}", message),
                            },
                            None => eprintln!(
                                "usage: :filter <all|projects|skills|technologies>"
                            ),
                        },
                        _ => eprintln!("unknown command: :{}", command),
                    }
                    continue;
                }

                // A new line supersedes whatever was pending.
                pending = Some(input);
                deadline = Instant::now() + debounce;
            }
            _ = sleep_until(deadline), if pending.is_some() => {
                if let Some(query) = pending.take() {
                    print_results(&search(&corpus, &query, filter, limit), OutputFormat::Text);
                    last_query = Some(query);
                }
            }
        }
    }

    Ok(())
}
