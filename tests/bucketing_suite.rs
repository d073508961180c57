use budget_analytics::analytics::TimeWindowAggregator;
use budget_analytics::domain::{FlowChannel, Granularity, MonetaryRecord};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 15, 0, 0, 0).unwrap()
}

fn outflow_at(timestamp: DateTime<Utc>, amount: f64) -> MonetaryRecord {
    MonetaryRecord::new(timestamp, amount, FlowChannel::Outflow, "Expenses")
}

#[test]
fn every_granularity_produces_contiguous_ordered_windows() {
    for granularity in [Granularity::Day, Granularity::Week, Granularity::Month] {
        let series = TimeWindowAggregator::bucket(&[], granularity, 6, reference_now())
            .expect("valid request");
        assert_eq!(series.buckets.len(), 6, "granularity {granularity}");
        for pair in series.buckets.windows(2) {
            assert_eq!(
                pair[0].window.end, pair[1].window.start,
                "windows must touch for {granularity}"
            );
            assert!(pair[0].window.start < pair[0].window.end);
        }
        assert_eq!(series.buckets.last().unwrap().window.end, reference_now());
    }
}

#[test]
fn identical_inputs_produce_identical_buckets() {
    let records = vec![
        outflow_at(reference_now() - Duration::days(2), 75.0),
        outflow_at(reference_now() - Duration::days(9), 20.0),
    ];
    let first =
        TimeWindowAggregator::bucket(&records, Granularity::Day, 10, reference_now()).unwrap();
    let second =
        TimeWindowAggregator::bucket(&records, Granularity::Day, 10, reference_now()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn boundary_records_stay_in_their_half_open_window() {
    let now = reference_now();
    let series = TimeWindowAggregator::bucket(
        &[
            // exactly on an interior boundary: belongs to the later window
            outflow_at(now - Duration::days(1), 10.0),
            // exactly at the reference instant: excluded entirely
            outflow_at(now, 99.0),
        ],
        Granularity::Day,
        3,
        now,
    )
    .unwrap();
    assert_eq!(series.buckets[1].sum, 0.0);
    assert_eq!(series.buckets[2].sum, 10.0);
    assert_eq!(series.total(), 10.0);
}

#[test]
fn order_of_input_records_does_not_matter() {
    let now = reference_now();
    let mut records: Vec<MonetaryRecord> = (0..10)
        .map(|age| outflow_at(now - Duration::days(age) - Duration::hours(1), age as f64))
        .collect();
    let forward =
        TimeWindowAggregator::bucket(&records, Granularity::Day, 10, now).unwrap();
    records.reverse();
    let reversed =
        TimeWindowAggregator::bucket(&records, Granularity::Day, 10, now).unwrap();
    assert_eq!(forward.sums(), reversed.sums());
}

#[test]
fn thirty_day_request_over_empty_history_reports_no_data() {
    let series =
        TimeWindowAggregator::bucket(&[], Granularity::Day, 30, reference_now()).unwrap();
    assert_eq!(series.buckets.len(), 30);
    assert!(!series.has_data);
    assert_eq!(series.total(), 0.0);
    assert_eq!(series.record_count(), 0);
}
