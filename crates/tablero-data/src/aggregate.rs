//! Chart data shaping: group-by aggregation and series helpers.

use crate::record::Record;
use crate::value::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregation applied to each group's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Aggregation {
    /// Sum of values
    #[default]
    Sum,
    /// Arithmetic mean
    Avg,
    /// Number of rows in the group
    Count,
    /// Smallest value
    Min,
    /// Largest value
    Max,
}

/// One labeled point of an aggregated series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Group label
    pub label: String,
    /// Aggregated value, rounded to 2 decimals
    pub value: f64,
}

/// Direction of a metric between two observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Increased
    Up,
    /// Decreased
    Down,
    /// Unchanged
    Neutral,
}

/// Group records by `group_key` and aggregate `value_key` per group.
///
/// Groups appear in first-seen order. Non-numeric values contribute 0 when
/// they cannot be read as a number (text is parsed, booleans count as 0/1).
/// Results are rounded to 2 decimals.
#[must_use]
pub fn aggregate_by(
    records: &[Record],
    group_key: &str,
    value_key: &str,
    aggregation: Aggregation,
) -> Vec<SeriesPoint> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();

    for record in records {
        let label = record.get_or_empty(group_key).display();
        if !groups.contains_key(&label) {
            order.push(label.clone());
        }
        groups
            .entry(label)
            .or_default()
            .push(numeric_value(&record.get_or_empty(value_key)));
    }

    order
        .into_iter()
        .map(|label| {
            let values = &groups[&label];
            let value = match aggregation {
                Aggregation::Sum => values.iter().sum(),
                Aggregation::Avg => values.iter().sum::<f64>() / values.len() as f64,
                Aggregation::Count => values.len() as f64,
                Aggregation::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
                Aggregation::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            };
            SeriesPoint {
                label,
                value: (value * 100.0).round() / 100.0,
            }
        })
        .collect()
}

/// Percentage change from `previous` to `current`, with its direction.
///
/// The magnitude is absolute and rounded to 1 decimal; the sign lives in the
/// returned [`Trend`]. A zero baseline reports 100% up for any positive
/// current value and neutral otherwise.
#[must_use]
pub fn percentage_change(current: f64, previous: f64) -> (f64, Trend) {
    if previous == 0.0 {
        return if current > 0.0 {
            (100.0, Trend::Up)
        } else {
            (0.0, Trend::Neutral)
        };
    }

    let change = (current - previous) / previous * 100.0;
    let trend = if change > 0.0 {
        Trend::Up
    } else if change < 0.0 {
        Trend::Down
    } else {
        Trend::Neutral
    };
    ((change.abs() * 10.0).round() / 10.0, trend)
}

/// Moving average over a trailing window.
///
/// Positions before the first full window copy the input value through, so
/// the output always has the same length as the input.
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if i + 1 < window {
                v
            } else {
                let slice = &values[i + 1 - window..=i];
                slice.iter().sum::<f64>() / window as f64
            }
        })
        .collect()
}

/// Running totals of a value series.
#[must_use]
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    let mut sum = 0.0;
    values
        .iter()
        .map(|v| {
            sum += v;
            sum
        })
        .collect()
}

fn numeric_value(value: &CellValue) -> f64 {
    match value {
        CellValue::Number(n) if n.is_finite() => *n,
        CellValue::Bool(b) => f64::from(u8::from(*b)),
        CellValue::Text(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
