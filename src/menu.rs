//! Interactive demo menu and comparison output.
//!
//! Six canned demos, each defined by its literal query texts. Every
//! selection runs the same queries against both accounts sequentially
//! (the un-improved account first) and prints a two-row table per query.

use std::io::{self, BufRead};
use std::time::Duration;

use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};

use crate::client::QueryTransport;
use crate::error::DemoResult;
use crate::runner::{QueryRunner, QueryStats};

const SEPARATOR: &str = "-----------------------------------------------------------";

const GROUP_BY_COUNT: &str = "SELECT Count(1), c.Category FROM c GROUP BY c.Category";
const GROUP_BY_AVG: &str = "SELECT AVG(c.Price), c.Category FROM c GROUP BY c.Category";

const DISTINCT_NAMES: &str = "SELECT DISTINCT c.Name FROM c WHERE c.Price > 500";

const DATETIMEBIN_WEEKLY: &str = "SELECT Count(1) as NewProduts, DateTimeBin(c.FirstAvailable, 'd', 7) AS DayAvailable FROM c WHERE c.FirstAvailable > \"2022-06-01T00:00:00.0000000Z\" GROUP BY DateTimeBin(c.FirstAvailable, 'd', 7)";
const DATETIMEBIN_ANCHORED: &str = "SELECT Count(1) as NewProduts, DateTimeBin(c.FirstAvailable,'d', 7, \"2022-06-01T00:00:00.0000000Z\") AS DayAvailable FROM c  WHERE c.FirstAvailable > \"2022-06-01T00:00:00.0000000Z\" GROUP BY DateTimeBin(c.FirstAvailable, 'd', 7, \"2022-06-01T00:00:00.0000000Z\")";

const OFFSET_LIMIT_NEAR: &str = "SELECT c.Name, c.Price, c.FirstAvailable FROM c WHERE c.Price > 150 AND c.Price < 500 ORDER BY c.FirstAvailable DESC OFFSET 1000 LIMIT 100";
const OFFSET_LIMIT_DEEP: &str = "SELECT c.Name, c.Price, c.FirstAvailable FROM c WHERE c.Price > 150 AND c.Price < 500 ORDER BY c.FirstAvailable DESC OFFSET 100000 LIMIT 100";

const JOIN_SUBQUERY: &str = "SELECT c.Name, c.Price, Rating FROM c JOIN(SELECT VALUE r FROM r IN c.CustomerRatings WHERE r.Stars < 3) AS Rating WHERE c.Price > 950";
const JOIN_FLAT: &str = "SELECT c.Name, c.Price, r as Rating FROM c JOIN r IN c.CustomerRatings WHERE c.Price > 950 and r.Stars < 3";

const EXISTS_COUNT: &str = "SELECT Count(1) FROM c WHERE c.Category = \"Music\" and EXISTS(SELECT VALUE r FROM r IN c.CustomerRatings WHERE r.Stars > 4)";

/// One canned demo: its menu label, the banner shown when it runs, and
/// the queries it executes in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demo {
    pub label: &'static str,
    pub banner: &'static str,
    pub queries: &'static [&'static str],
}

pub const DEMOS: [Demo; 6] = [
    Demo {
        label: "GROUP BY using the index",
        banner: "Showing improvements to GROUP BY which can now use the index.",
        queries: &[GROUP_BY_COUNT, GROUP_BY_AVG],
    },
    Demo {
        label: "DISTINCT using the index",
        banner: "Showing improvements to DISTINCT which can now use the index.",
        queries: &[DISTINCT_NAMES],
    },
    Demo {
        label: "DateTimeBin system function",
        banner: "Showing the new DateTimeBin system function.",
        queries: &[DATETIMEBIN_WEEKLY, DATETIMEBIN_ANCHORED],
    },
    Demo {
        label: "OFFSET LIMIT optimizations",
        banner: "Showing improvements to OFFSET LIMIT.",
        queries: &[OFFSET_LIMIT_NEAR, OFFSET_LIMIT_DEEP],
    },
    Demo {
        label: "JOIN optimizations",
        banner: "Showing improvements to JOIN without needing to write subqueries.",
        queries: &[JOIN_SUBQUERY, JOIN_FLAT],
    },
    Demo {
        label: "EXISTS optimizations",
        banner: "Showing improvements to EXISTS.",
        queries: &[EXISTS_COUNT],
    },
];

/// Demo bound to a menu keypress, if any. '7' (exit) and anything else
/// are unbound.
pub fn demo_for_key(key: char) -> Option<&'static Demo> {
    match key {
        '1'..='6' => DEMOS.get(key as usize - '1' as usize),
        _ => None,
    }
}

/// Blocking read-eval loop over single keystrokes. Returns when the
/// exit key is pressed; query errors propagate out and end the process.
pub async fn run_menu<A, B>(
    runner_with: &QueryRunner<A>,
    runner_without: &QueryRunner<B>,
) -> DemoResult<()>
where
    A: QueryTransport,
    B: QueryTransport,
{
    loop {
        render_menu();

        let key = read_key()?;
        if key == '7' {
            println!("Goodbye!");
            return Ok(());
        }

        let Some(demo) = demo_for_key(key) else {
            continue;
        };

        println!("{}", demo.banner);
        println!("{}", SEPARATOR);

        for query in demo.queries {
            let stats_without = runner_without.run_query(query).await?;
            let stats_with = runner_with.run_query(query).await?;

            print!("{}", format_comparison(&stats_with, &stats_without, query));
            wait_for_enter();
        }
    }
}

fn render_menu() {
    let mut stdout = io::stdout();
    let _ = execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    );

    println!(
        "{}",
        "Azure Cosmos DB Query Optimizations Demo".white().bold()
    );
    println!("{}", SEPARATOR);
    for (i, demo) in DEMOS.iter().enumerate() {
        println!("[{}]   {}", i + 1, demo.label);
    }
    println!("[7]   Exit\n");
}

/// Read one keypress without echo, raw mode held only for the read.
fn read_key() -> DemoResult<char> {
    terminal::enable_raw_mode()?;
    let key = loop {
        match event::read() {
            Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => {
                if let KeyCode::Char(c) = k.code {
                    break Ok(c);
                }
            }
            Ok(_) => {}
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    Ok(key?)
}

fn wait_for_enter() {
    println!("Press enter to continue...");
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
    println!();
}

/// The two-row comparison table for one query, RU charge rounded to two
/// decimal places for both rows.
pub fn format_comparison(
    stats_with: &QueryStats,
    stats_without: &QueryStats,
    query_text: &str,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\nShowing final results for query \"{}\"\n",
        query_text
    ));
    out.push_str(SEPARATOR);
    out.push('\n');

    out.push_str("|Account             |RU Charge |Execution Time  |\n");
    out.push_str("|--------------------|----------|----------------|\n");
    out.push_str(&format!(
        "|Before improvements |{:<10}|{:<16}|\n",
        format!("{:.2}", stats_without.request_charge),
        format_duration(stats_without.execution_time)
    ));
    out.push_str(&format!(
        "|After improvements  |{:<10}|{:<16}|\n",
        format!("{:.2}", stats_with.request_charge),
        format_duration(stats_with.execution_time)
    ));

    out
}

pub fn format_duration(d: Duration) -> String {
    if d.as_secs() > 0 {
        format!("{:.2}s", d.as_secs_f64())
    } else if d.as_millis() > 0 {
        format!("{:.2}ms", d.as_secs_f64() * 1000.0)
    } else {
        format!("{:.2}µs", d.as_secs_f64() * 1_000_000.0)
    }
}
