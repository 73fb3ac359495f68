//! Group-by, sort and top-N primitives shared by the dashboard views.
//!
//! Groups keep the order in which their key was first seen, and every sort
//! is stable, so equal values stay in first-encountered order.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::AggregationView;

/// Per-group reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOp {
    /// Mean of the present values; groups with no value are left out.
    Mean,
    /// Sum of the present values; missing values count as zero.
    Sum,
    /// Number of rows in the group, values ignored.
    Count,
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    sum: f64,
    observed: usize,
    rows: usize,
}

impl Accumulator {
    fn push(&mut self, value: Option<f64>) {
        self.rows += 1;
        if let Some(v) = value {
            self.sum += v;
            self.observed += 1;
        }
    }

    fn finish(&self, op: AggregateOp) -> Option<f64> {
        match op {
            AggregateOp::Mean if self.observed == 0 => None,
            AggregateOp::Mean => Some(self.sum / self.observed as f64),
            AggregateOp::Sum => Some(self.sum),
            AggregateOp::Count => Some(self.rows as f64),
        }
    }
}

/// Group `items` by `key` and reduce `value` with `op`.
///
/// Items whose key is empty are not part of any group. The result is in
/// first-encountered key order.
pub fn group_aggregate<'a, T, K, V>(
    items: impl IntoIterator<Item = &'a T>,
    key: K,
    value: V,
    op: AggregateOp,
) -> Vec<(String, f64)>
where
    T: 'a,
    K: Fn(&'a T) -> &'a str,
    V: Fn(&'a T) -> Option<f64>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Accumulator)> = Vec::new();

    for item in items {
        let k = key(item).trim();
        if k.is_empty() {
            continue;
        }

        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k, Accumulator::default()));
            groups.len() - 1
        });
        groups[slot].1.push(value(item));
    }

    groups
        .into_iter()
        .filter_map(|(k, acc)| acc.finish(op).map(|v| (k.to_string(), v)))
        .collect()
}

/// Stable descending sort; `None` sorts after every value.
pub fn sort_descending_by<T, F>(items: &mut [T], score: F)
where
    F: Fn(&T) -> Option<f64>,
{
    items.sort_by(|a, b| match (score(a), score(b)) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Sort pairs descending by value and keep the first `n`.
pub fn top_n(mut pairs: Vec<(String, f64)>, n: usize) -> AggregationView {
    sort_descending_by(&mut pairs, |(_, v)| Some(*v));
    pairs.truncate(n);
    AggregationView::from(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        club: &'static str,
        value: Option<f64>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { club: "Club A", value: Some(4.0) },
            Row { club: "Club B", value: Some(1.0) },
            Row { club: "Club A", value: Some(2.0) },
            Row { club: "", value: Some(100.0) },
            Row { club: "Club C", value: None },
            Row { club: "Club B", value: None },
        ]
    }

    fn aggregate(op: AggregateOp) -> Vec<(String, f64)> {
        let data = rows();
        group_aggregate(data.iter(), |r| r.club, |r| r.value, op)
    }

    #[test]
    fn test_mean_skips_missing_and_empty_groups() {
        assert_eq!(
            aggregate(AggregateOp::Mean),
            vec![("Club A".to_string(), 3.0), ("Club B".to_string(), 1.0)]
        );
    }

    #[test]
    fn test_sum_counts_missing_as_zero() {
        assert_eq!(
            aggregate(AggregateOp::Sum),
            vec![
                ("Club A".to_string(), 6.0),
                ("Club B".to_string(), 1.0),
                ("Club C".to_string(), 0.0),
            ]
        );
    }

    #[test]
    fn test_count_ignores_values() {
        assert_eq!(
            aggregate(AggregateOp::Count),
            vec![
                ("Club A".to_string(), 2.0),
                ("Club B".to_string(), 2.0),
                ("Club C".to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn test_top_n_is_stable_on_ties() {
        let pairs = vec![
            ("First".to_string(), 1.0),
            ("Big".to_string(), 9.0),
            ("Second".to_string(), 1.0),
            ("Third".to_string(), 1.0),
        ];

        let view = top_n(pairs, 3);
        assert_eq!(view.labels(), vec!["Big", "First", "Second"]);
    }

    #[test]
    fn test_missing_scores_sort_last() {
        let mut items = vec![None, Some(1.0), None, Some(3.0)];
        sort_descending_by(&mut items, |v| *v);
        assert_eq!(items, vec![Some(3.0), Some(1.0), None, None]);
    }
}
