/// Daily-to-monthly precipitation aggregation.
///
/// The archive API returns two index-aligned sequences: ISO dates and
/// daily precipitation totals, with `None` marking days without an
/// observation. This module folds them into exactly twelve calendar-month
/// totals, January through December.

use crate::ingest::open_meteo::DailyPrecipitation;
use crate::model::{AggregateError, MONTH_LABELS, MonthlyTotal};

/// Sum daily precipitation values into twelve monthly totals.
///
/// Always returns twelve entries in calendar order. Months with no
/// contributing days total exactly 0.0, and `None` values contribute 0
/// without failing the run. A zero value is a valid observation and is
/// counted.
///
/// The month bucket is chosen by the date's month digits alone; there is
/// no year filter. The archive query already constrains the range to one
/// calendar year, so dates from different years only merge if the caller
/// mixes responses.
///
/// # Errors
/// - `ShapeMismatch` when the sequences differ in length (checked before
///   any accumulation)
/// - `MalformedDate` when an entry does not start with a `YYYY-MM` prefix
pub fn monthly_totals(
    dates: &[String],
    values: &[Option<f64>],
) -> Result<Vec<MonthlyTotal>, AggregateError> {
    if dates.len() != values.len() {
        return Err(AggregateError::ShapeMismatch {
            dates: dates.len(),
            values: values.len(),
        });
    }

    let mut totals = [0.0f64; 12];

    for (date, value) in dates.iter().zip(values) {
        let month = month_index(date)?;
        if let Some(v) = value {
            totals[month] += v;
        }
    }

    Ok(totals
        .iter()
        .zip(MONTH_LABELS)
        .map(|(&precipitation, month)| MonthlyTotal {
            month,
            precipitation,
        })
        .collect())
}

/// Convenience wrapper over the archive adapter's output shape.
pub fn monthly_totals_from_daily(
    daily: &DailyPrecipitation,
) -> Result<Vec<MonthlyTotal>, AggregateError> {
    monthly_totals(&daily.time, &daily.precipitation_sum)
}

/// Zero-based month index from an ISO `YYYY-MM-DD` date string.
///
/// Only the `YYYY-MM` prefix is validated; the day component is not
/// consulted.
fn month_index(date: &str) -> Result<usize, AggregateError> {
    // byte-level checks: the prefix may carry arbitrary (multibyte) junk,
    // and usize::parse would wave through a leading `+`
    let bytes = date.as_bytes();
    if bytes.len() < 7
        || !bytes[..4].iter().all(u8::is_ascii_digit)
        || bytes[4] != b'-'
        || !bytes[5].is_ascii_digit()
        || !bytes[6].is_ascii_digit()
    {
        return Err(AggregateError::MalformedDate(date.to_string()));
    }

    let month = (bytes[5] - b'0') as usize * 10 + (bytes[6] - b'0') as usize;
    if !(1..=12).contains(&month) {
        return Err(AggregateError::MalformedDate(date.to_string()));
    }

    Ok(month - 1)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_months_of_rain() {
        let totals = monthly_totals(
            &dates(&["2024-01-05", "2024-01-20", "2024-02-10"]),
            &[Some(0.5), Some(1.2), Some(2.0)],
        )
        .unwrap();

        assert_eq!(totals.len(), 12);
        assert_eq!(totals[0].month, "Jan");
        assert!((totals[0].precipitation - 1.7).abs() < 1e-9);
        assert_eq!(totals[1].month, "Feb");
        assert!((totals[1].precipitation - 2.0).abs() < 1e-9);
        for total in &totals[2..] {
            assert_eq!(total.precipitation, 0.0);
        }
    }

    #[test]
    fn test_missing_observation_counts_as_zero() {
        let totals = monthly_totals(&dates(&["2024-03-01"]), &[None]).unwrap();
        assert_eq!(totals[2].month, "Mar");
        assert_eq!(totals[2].precipitation, 0.0);
    }

    #[test]
    fn test_missing_observation_does_not_poison_the_month() {
        let totals = monthly_totals(
            &dates(&["2024-03-01", "2024-03-02", "2024-03-03"]),
            &[Some(0.4), None, Some(0.6)],
        )
        .unwrap();
        assert!((totals[2].precipitation - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_yields_twelve_zero_months() {
        let totals = monthly_totals(&[], &[]).unwrap();
        assert_eq!(totals.len(), 12);
        for (total, label) in totals.iter().zip(MONTH_LABELS) {
            assert_eq!(total.month, label);
            assert_eq!(total.precipitation, 0.0);
        }
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let result = monthly_totals(&dates(&["2024-01-01", "2024-01-02"]), &[Some(0.1)]);
        assert_eq!(
            result,
            Err(AggregateError::ShapeMismatch { dates: 2, values: 1 })
        );
    }

    #[test]
    fn test_zero_is_a_valid_observation() {
        let totals = monthly_totals(
            &dates(&["2024-06-01", "2024-06-02"]),
            &[Some(0.0), Some(0.25)],
        )
        .unwrap();
        assert!((totals[5].precipitation - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_sum_of_totals_equals_sum_of_inputs() {
        let input_dates = dates(&[
            "2024-01-15",
            "2024-02-29",
            "2024-05-01",
            "2024-05-02",
            "2024-11-30",
            "2024-12-31",
        ]);
        let input_values = [Some(0.12), None, Some(1.5), Some(0.0), Some(2.75), Some(0.33)];

        let totals = monthly_totals(&input_dates, &input_values).unwrap();

        let input_sum: f64 = input_values.iter().flatten().sum();
        let output_sum: f64 = totals.iter().map(|t| t.precipitation).sum();
        assert!((input_sum - output_sum).abs() < 1e-9);
    }

    #[test]
    fn test_aggregation_is_pure() {
        let input_dates = dates(&["2024-07-04", "2024-07-05"]);
        let input_values = [Some(0.8), Some(0.2)];

        let first = monthly_totals(&input_dates, &input_values).unwrap();
        let second = monthly_totals(&input_dates, &input_values).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_years_merge_into_month_buckets() {
        // No year filter: March of two different years lands in one bucket.
        let totals = monthly_totals(
            &dates(&["2023-03-15", "2024-03-15"]),
            &[Some(1.0), Some(2.0)],
        )
        .unwrap();
        assert!((totals[2].precipitation - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_dates_are_rejected() {
        // "2024-€1-05" lands a multibyte char in the month slot;
        // "2024-+1-05" would satisfy usize::parse
        for bad in [
            "03/15/2024",
            "2024",
            "2024-XX-01",
            "2024-€1-05",
            "2024-+1-05",
            "20240315",
            "2024-13-01",
            "2024-00-01",
            "",
        ] {
            let result = monthly_totals(&dates(&[bad]), &[Some(1.0)]);
            assert_eq!(
                result,
                Err(AggregateError::MalformedDate(bad.to_string())),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_day_component_is_not_consulted() {
        // Month comes from the digits after the first hyphen; the day part
        // is passed through untouched.
        let totals = monthly_totals(&dates(&["2024-04-99"]), &[Some(0.5)]).unwrap();
        assert!((totals[3].precipitation - 0.5).abs() < 1e-9);
    }
}
