use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{Datelike, Duration, NaiveDate};

use crate::model::{DrillRecord, PeriodSummary};

// Pure functions only: no I/O, no clock reads. Callers pass dates in.

/// Groups records by exact date.
pub fn bucket_by_date(records: &[DrillRecord]) -> BTreeMap<NaiveDate, Vec<DrillRecord>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<DrillRecord>> = BTreeMap::new();
    for record in records {
        buckets.entry(record.date).or_default().push(record.clone());
    }
    buckets
}

pub fn sum_shots(records: &[DrillRecord]) -> u64 {
    records.iter().map(|d| u64::from(d.shots)).sum()
}

pub fn distinct_dates(records: &[DrillRecord]) -> BTreeSet<NaiveDate> {
    records.iter().map(|d| d.date).collect()
}

/// The name occurring most often in `records`, or `None` on empty input.
///
/// Ties resolve to the name whose first occurrence comes earliest in the
/// input. A pairwise reduce without an explicit tie policy would depend on
/// comparison order, so the rule is pinned here.
pub fn most_common_name(records: &[DrillRecord]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.name.as_str()).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for record in records {
        let name = record.name.as_str();
        if !seen.insert(name) {
            continue;
        }
        let count = counts[name];
        // Strictly-greater keeps the earliest first occurrence on ties.
        if best.map(|(_, c)| count > c).unwrap_or(true) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// The 7-day window starting on the Sunday on or before `reference` and
/// ending 6 days later. Weeks are anchored to Sunday regardless of locale.
pub fn week_window(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = i64::from(reference.weekday().num_days_from_sunday());
    let start = reference - Duration::days(back);
    (start, start + Duration::days(6))
}

/// Totals, distinct training days and the modal drill name over `records`.
pub fn period_summary(records: &[DrillRecord]) -> PeriodSummary {
    PeriodSummary {
        total_shots: sum_shots(records),
        distinct_days_trained: distinct_dates(records).len(),
        most_common_drill_name: most_common_name(records),
    }
}

pub fn month_summary(records: &[DrillRecord], year: i32, month: u32) -> PeriodSummary {
    let in_month: Vec<DrillRecord> = records
        .iter()
        .filter(|d| d.date.year() == year && d.date.month() == month)
        .cloned()
        .collect();
    period_summary(&in_month)
}

pub fn year_summary(records: &[DrillRecord], year: i32) -> PeriodSummary {
    let in_year: Vec<DrillRecord> = records
        .iter()
        .filter(|d| d.date.year() == year)
        .cloned()
        .collect();
    period_summary(&in_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn drill(name: &str, shots: u32, date: &str) -> DrillRecord {
        DrillRecord::new(name, shots, date.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_sum_shots_empty_is_zero() {
        assert_eq!(sum_shots(&[]), 0);
    }

    #[test]
    fn test_bucketing_preserves_total() {
        let records = vec![
            drill("Putting", 50, "2024-06-10"),
            drill("Chipping", 30, "2024-06-10"),
            drill("Driving", 20, "2024-06-12"),
        ];

        let buckets = bucket_by_date(&records);
        assert_eq!(buckets.len(), 2);

        let bucketed_total: u64 = buckets.values().map(|day| sum_shots(day)).sum();
        assert_eq!(bucketed_total, sum_shots(&records));
    }

    #[test]
    fn test_distinct_dates() {
        let records = vec![
            drill("Putting", 50, "2024-06-10"),
            drill("Chipping", 30, "2024-06-10"),
            drill("Driving", 20, "2024-06-12"),
        ];
        assert_eq!(distinct_dates(&records).len(), 2);
    }

    #[test]
    fn test_most_common_name_empty_is_none() {
        assert_eq!(most_common_name(&[]), None);
    }

    #[test]
    fn test_most_common_name_picks_the_mode() {
        let records = vec![
            drill("A", 1, "2024-06-10"),
            drill("B", 1, "2024-06-10"),
            drill("A", 1, "2024-06-11"),
        ];
        assert_eq!(most_common_name(&records), Some("A".to_string()));
    }

    #[test]
    fn test_most_common_name_tie_breaks_on_first_occurrence() {
        let records = vec![drill("B", 1, "2024-06-10"), drill("A", 1, "2024-06-10")];
        assert_eq!(most_common_name(&records), Some("B".to_string()));

        // Still holds when the tie forms later in the input.
        let records = vec![
            drill("B", 1, "2024-06-10"),
            drill("A", 1, "2024-06-10"),
            drill("A", 1, "2024-06-11"),
            drill("B", 1, "2024-06-11"),
        ];
        assert_eq!(most_common_name(&records), Some("B".to_string()));
    }

    #[test]
    fn test_week_window_is_sunday_anchored() {
        for offset in 0..14 {
            let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() + Duration::days(offset);
            let (start, end) = week_window(reference);
            assert_eq!(start.weekday(), Weekday::Sun);
            assert_eq!(end, start + Duration::days(6));
            assert!(reference >= start && reference <= end);
        }
    }

    #[test]
    fn test_week_window_of_a_sunday_starts_on_it() {
        // 2024-06-09 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(week_window(sunday).0, sunday);
    }

    #[test]
    fn test_month_summary_scenario() {
        let records = vec![
            drill("Putting", 50, "2024-06-10"),
            drill("Chipping", 30, "2024-06-10"),
            drill("Driving", 99, "2024-07-01"),
        ];

        let summary = month_summary(&records, 2024, 6);
        assert_eq!(summary.total_shots, 80);
        assert_eq!(summary.distinct_days_trained, 1);
        // Equal counts: the first inserted name wins.
        assert_eq!(summary.most_common_drill_name, Some("Putting".to_string()));
    }

    #[test]
    fn test_year_summary_filters_by_year() {
        let records = vec![
            drill("Putting", 50, "2024-06-10"),
            drill("Driving", 10, "2023-12-31"),
        ];

        let summary = year_summary(&records, 2024);
        assert_eq!(summary.total_shots, 50);
        assert_eq!(summary.distinct_days_trained, 1);
    }
}
