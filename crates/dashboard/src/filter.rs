use std::fmt::Display;
use std::num::ParseFloatError;

use chrono::NaiveDate;
use model::filter::{FilterCriteria, DEFAULT_RECORD_LIMIT};

use crate::surface::{Field, InputSurface};

/// Format of date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads the current filter state from the input fields.
///
/// Empty fields are unset. Values that can not be read as a date or number are
/// logged and treated as unset as well. The record limit falls back to
/// `DEFAULT_RECORD_LIMIT` when empty or not an integer, any integer entered is
/// kept, zero and negatives included.
pub fn read_filters<I: InputSurface + ?Sized>(input: &I) -> FilterCriteria {
    let record_limit = parse_field(input, Field::RecordLimit, |value| value.parse::<i64>())
        .unwrap_or(DEFAULT_RECORD_LIMIT);
    if record_limit <= 0 {
        log::warn!("record limit {record_limit} is passed on, the backend decides what it means");
    }

    FilterCriteria {
        start_date: parse_field(input, Field::StartDate, parse_date),
        end_date: parse_field(input, Field::EndDate, parse_date),
        min_distance_km: parse_field(input, Field::MinDistance, parse_km),
        max_distance_km: parse_field(input, Field::MaxDistance, parse_km),
        record_limit,
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

fn parse_km(value: &str) -> Result<f64, ParseFloatError> {
    value.parse::<f64>()
}

fn parse_field<I, T, E, P>(input: &I, field: Field, parse: P) -> Option<T>
where
    I: InputSurface + ?Sized,
    E: Display,
    P: Fn(&str) -> Result<T, E>,
{
    let raw = input.read(field)?;
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(why) => {
            log::warn!("ignoring unreadable value '{value}' in {field}: {why}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::MemoryInput;

    use super::*;

    #[test]
    fn empty_inputs_give_default_criteria() {
        let input = MemoryInput::default();
        assert_eq!(read_filters(&input), FilterCriteria::default());

        let input = MemoryInput::from_pairs([
            (Field::StartDate, ""),
            (Field::MinDistance, "   "),
            (Field::RecordLimit, ""),
        ]);
        assert_eq!(read_filters(&input), FilterCriteria::default());
    }

    #[test]
    fn reads_all_fields() {
        let input = MemoryInput::from_pairs([
            (Field::StartDate, "2024-01-01"),
            (Field::EndDate, "2024-01-31"),
            (Field::MinDistance, "1.5"),
            (Field::MaxDistance, "20"),
            (Field::RecordLimit, "250"),
        ]);
        let criteria = read_filters(&input);
        assert_eq!(criteria.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(criteria.end_date, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(criteria.min_distance_km, Some(1.5));
        assert_eq!(criteria.max_distance_km, Some(20.0));
        assert_eq!(criteria.record_limit, 250);
    }

    #[test]
    fn reversed_dates_and_negative_distances_pass_through() {
        let input = MemoryInput::from_pairs([
            (Field::StartDate, "2024-02-01"),
            (Field::EndDate, "2024-01-01"),
            (Field::MinDistance, "-3"),
        ]);
        let criteria = read_filters(&input);
        assert!(criteria.start_date > criteria.end_date);
        assert_eq!(criteria.min_distance_km, Some(-3.0));
    }

    #[test]
    fn unreadable_record_limit_falls_back_to_default() {
        for value in ["lots", "2.5", "  "] {
            let input = MemoryInput::from_pairs([(Field::RecordLimit, value)]);
            assert_eq!(read_filters(&input).record_limit, 100, "{value:?}");
        }
    }

    #[test]
    fn zero_and_negative_record_limits_pass_through() {
        for (value, expected) in [("0", 0), ("-5", -5), (" 7 ", 7)] {
            let input = MemoryInput::from_pairs([(Field::RecordLimit, value)]);
            assert_eq!(read_filters(&input).record_limit, expected, "{value:?}");
        }
    }

    #[test]
    fn unreadable_values_are_unset() {
        let input = MemoryInput::from_pairs([
            (Field::StartDate, "01/02/2024"),
            (Field::MaxDistance, "far"),
        ]);
        let criteria = read_filters(&input);
        assert_eq!(criteria.start_date, None);
        assert_eq!(criteria.max_distance_km, None);
    }
}
