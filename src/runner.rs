//! Runs one query to exhaustion and accumulates its cost metrics.

use std::time::{Duration, Instant};

use colored::Colorize;

use crate::client::{QueryDefinition, QueryTransport};
use crate::error::DemoResult;

/// Aggregate cost of one query run, summed across all result pages.
/// Created fresh per invocation and discarded after being printed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QueryStats {
    pub request_charge: f64,
    pub execution_time: Duration,
}

impl QueryStats {
    pub fn add_page(&mut self, charge: f64, elapsed: Duration) {
        self.request_charge += charge;
        self.execution_time += elapsed;
    }
}

/// Drives queries against one account's container.
pub struct QueryRunner<T> {
    transport: T,
    endpoint: String,
    with_improvements: bool,
}

impl<T: QueryTransport> QueryRunner<T> {
    pub fn new(transport: T, endpoint: impl Into<String>, with_improvements: bool) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            with_improvements,
        }
    }

    /// Drain the query's result pages, summing the RU charge reported by
    /// each page and the client-measured elapsed time around each fetch.
    /// A transport failure mid-drain propagates directly to the caller.
    pub async fn run_query(&self, query_text: &str) -> DemoResult<QueryStats> {
        self.print_query_setup(query_text);

        let query = QueryDefinition::new(query_text);
        let mut stats = QueryStats::default();
        let mut continuation: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let started = Instant::now();
            let page = self
                .transport
                .query_page(&query, continuation.as_deref())
                .await?;
            let elapsed = started.elapsed();

            stats.add_page(page.request_charge, elapsed);
            pages += 1;

            tracing::debug!(
                page = pages,
                charge = page.request_charge,
                documents = page.documents.len(),
                "Drained query page"
            );

            continuation = page.continuation;
            if continuation.is_none() {
                break;
            }
        }

        println!(
            "Final Request charge: {}, Final execution time: {:?}\n\n",
            stats.request_charge, stats.execution_time
        );

        Ok(stats)
    }

    fn print_query_setup(&self, query_text: &str) {
        if self.with_improvements {
            println!(
                "Running against account with improvements at {}",
                self.endpoint.cyan()
            );
        } else {
            println!(
                "Running against account without improvements at {}",
                self.endpoint.cyan()
            );
        }
        println!("\t* Query: {}\n", query_text.green());
    }
}
