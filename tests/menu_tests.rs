//! Menu key bindings and comparison table formatting

use std::time::Duration;

use cosmos_query_demo::menu::{demo_for_key, format_comparison, format_duration, DEMOS};
use cosmos_query_demo::QueryStats;

#[test]
fn test_menu_lists_six_demos_in_order() {
    let labels: Vec<&str> = DEMOS.iter().map(|d| d.label).collect();
    assert_eq!(
        labels,
        vec![
            "GROUP BY using the index",
            "DISTINCT using the index",
            "DateTimeBin system function",
            "OFFSET LIMIT optimizations",
            "JOIN optimizations",
            "EXISTS optimizations",
        ]
    );
}

#[test]
fn test_group_by_key_runs_fixed_query_pair() {
    let demo = demo_for_key('1').unwrap();
    assert_eq!(
        demo.queries,
        &[
            "SELECT Count(1), c.Category FROM c GROUP BY c.Category",
            "SELECT AVG(c.Price), c.Category FROM c GROUP BY c.Category",
        ]
    );
}

#[test]
fn test_distinct_key_runs_fixed_query() {
    let demo = demo_for_key('2').unwrap();
    assert_eq!(
        demo.queries,
        &["SELECT DISTINCT c.Name FROM c WHERE c.Price > 500"]
    );
}

#[test]
fn test_datetimebin_key_runs_fixed_query_pair() {
    let demo = demo_for_key('3').unwrap();
    assert_eq!(demo.queries.len(), 2);
    assert_eq!(
        demo.queries[0],
        "SELECT Count(1) as NewProduts, DateTimeBin(c.FirstAvailable, 'd', 7) AS DayAvailable FROM c WHERE c.FirstAvailable > \"2022-06-01T00:00:00.0000000Z\" GROUP BY DateTimeBin(c.FirstAvailable, 'd', 7)"
    );
    assert_eq!(
        demo.queries[1],
        "SELECT Count(1) as NewProduts, DateTimeBin(c.FirstAvailable,'d', 7, \"2022-06-01T00:00:00.0000000Z\") AS DayAvailable FROM c  WHERE c.FirstAvailable > \"2022-06-01T00:00:00.0000000Z\" GROUP BY DateTimeBin(c.FirstAvailable, 'd', 7, \"2022-06-01T00:00:00.0000000Z\")"
    );
}

#[test]
fn test_offset_limit_key_runs_fixed_query_pair() {
    let demo = demo_for_key('4').unwrap();
    assert_eq!(
        demo.queries,
        &[
            "SELECT c.Name, c.Price, c.FirstAvailable FROM c WHERE c.Price > 150 AND c.Price < 500 ORDER BY c.FirstAvailable DESC OFFSET 1000 LIMIT 100",
            "SELECT c.Name, c.Price, c.FirstAvailable FROM c WHERE c.Price > 150 AND c.Price < 500 ORDER BY c.FirstAvailable DESC OFFSET 100000 LIMIT 100",
        ]
    );
}

#[test]
fn test_join_key_runs_fixed_query_pair() {
    let demo = demo_for_key('5').unwrap();
    assert_eq!(
        demo.queries,
        &[
            "SELECT c.Name, c.Price, Rating FROM c JOIN(SELECT VALUE r FROM r IN c.CustomerRatings WHERE r.Stars < 3) AS Rating WHERE c.Price > 950",
            "SELECT c.Name, c.Price, r as Rating FROM c JOIN r IN c.CustomerRatings WHERE c.Price > 950 and r.Stars < 3",
        ]
    );
}

#[test]
fn test_exists_key_runs_fixed_query() {
    let demo = demo_for_key('6').unwrap();
    assert_eq!(
        demo.queries,
        &[
            "SELECT Count(1) FROM c WHERE c.Category = \"Music\" and EXISTS(SELECT VALUE r FROM r IN c.CustomerRatings WHERE r.Stars > 4)"
        ]
    );
}

#[test]
fn test_unbound_keys_have_no_demo() {
    for key in ['0', '7', '8', '9', 'a', 'q', ' ', '\n'] {
        assert!(demo_for_key(key).is_none(), "key {:?} should be unbound", key);
    }
}

#[test]
fn test_comparison_rounds_charge_to_two_decimals() {
    let stats_with = QueryStats {
        request_charge: 123.456,
        execution_time: Duration::from_millis(1500),
    };
    let stats_without = QueryStats {
        request_charge: 2048.0,
        execution_time: Duration::from_micros(250),
    };

    let table = format_comparison(&stats_with, &stats_without, "SELECT * FROM c");

    assert!(table.contains("|Before improvements |2048.00   |250.00µs        |"));
    assert!(table.contains("|After improvements  |123.46    |1.50s           |"));
}

#[test]
fn test_comparison_rounds_regardless_of_magnitude() {
    let tiny = QueryStats {
        request_charge: 0.0,
        execution_time: Duration::ZERO,
    };
    let huge = QueryStats {
        request_charge: 12345.678,
        execution_time: Duration::from_secs(90),
    };

    let table = format_comparison(&tiny, &huge, "SELECT Count(1) FROM c");

    assert!(table.contains("|Before improvements |12345.68  |"));
    assert!(table.contains("|After improvements  |0.00      |"));
}

#[test]
fn test_comparison_layout() {
    let stats = QueryStats {
        request_charge: 1.0,
        execution_time: Duration::from_millis(10),
    };

    let table = format_comparison(&stats, &stats, "SELECT DISTINCT c.Name FROM c");

    assert!(table.contains("Showing final results for query \"SELECT DISTINCT c.Name FROM c\""));
    assert!(table.contains("|Account             |RU Charge |Execution Time  |"));
    assert!(table.contains("|--------------------|----------|----------------|"));
}

#[test]
fn test_format_duration_units() {
    assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    assert_eq!(format_duration(Duration::from_millis(42)), "42.00ms");
    assert_eq!(format_duration(Duration::from_micros(250)), "250.00µs");
    assert_eq!(format_duration(Duration::ZERO), "0.00µs");
}
