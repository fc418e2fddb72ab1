//! Request parameter validation: integers, enums, clamped dates.

use crate::error::AppError;
use chrono::NaiveDate;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Layout accepted for every date parameter.
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// chrono's `%Y` and `%m` also take signed years and single digits.
static DATE_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok());

/// Parse a base-10 integer parameter.
pub fn parse_int(name: &str, raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("{} must be an integer, got '{}'", name, raw)))
}

/// Parse an enumerated parameter; `E::from_str` is expected to compare case-insensitively.
pub fn parse_enum<E: FromStr>(name: &str, raw: &str) -> Result<E, AppError> {
    raw.parse::<E>()
        .map_err(|_| AppError::BadRequest(format!("unrecognized {}: '{}'", name, raw)))
}

/// Inclusive year window; both ends required.
pub fn year_range(start: i32, end: i32) -> Result<(i32, i32), AppError> {
    if start > end {
        return Err(AppError::BadRequest(format!(
            "start-year {} is after end-year {}",
            start, end
        )));
    }
    Ok((start, end))
}

/// Valid interval of a dated dataset. Bounds are kept as (y, m, d) so the
/// ranges can be constants.
#[derive(Clone, Copy, Debug)]
pub struct DateRange {
    pub min: (i32, u32, u32),
    pub max: (i32, u32, u32),
}

impl DateRange {
    pub const fn new(min: (i32, u32, u32), max: (i32, u32, u32)) -> Self {
        DateRange { min, max }
    }

    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        let (y, m, d) = self.min;
        let min = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);
        let (y, m, d) = self.max;
        let max = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MAX);
        (min, max)
    }

    /// Parse `YYYY-MM-DD` and clamp into the range. Malformed input is an
    /// error; out-of-range input snaps to the nearest bound.
    pub fn clamp(&self, raw: &str) -> Result<NaiveDate, AppError> {
        let malformed = || AppError::BadRequest(format!("date must be YYYY-MM-DD, got '{}'", raw));
        let trimmed = raw.trim();
        let shape = DATE_SHAPE
            .as_ref()
            .ok_or_else(|| AppError::Internal("date pattern failed to compile".into()))?;
        if !shape.is_match(trimmed) {
            return Err(malformed());
        }
        let date = NaiveDate::parse_from_str(trimmed, DATE_LAYOUT).map_err(|_| malformed())?;
        let (min, max) = self.bounds();
        Ok(date.clamp(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: DateRange = DateRange::new((1783, 9, 3), (2000, 12, 31));

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ints() {
        assert_eq!(parse_int("year", "1926").unwrap(), 1926);
        assert_eq!(parse_int("year", "-12").unwrap(), -12);
        assert_eq!(parse_int("year", " 1669 ").unwrap(), 1669);
        for bad in ["", "abc", "19x6", "1.5", "99999999999"] {
            assert!(matches!(parse_int("year", bad), Err(AppError::BadRequest(_))), "{bad}");
        }
    }

    #[test]
    fn clamp_inside_range() {
        assert_eq!(RANGE.clamp("1900-06-09").unwrap(), ymd(1900, 6, 9));
    }

    #[test]
    fn clamp_to_bounds() {
        assert_eq!(RANGE.clamp("2020-06-09").unwrap(), ymd(2000, 12, 31));
        assert_eq!(RANGE.clamp("1620-06-09").unwrap(), ymd(1783, 9, 3));
    }

    #[test]
    fn clamp_rejects_malformed() {
        assert!(matches!(RANGE.clamp("1920-15-40"), Err(AppError::BadRequest(_))));
        assert!(RANGE.clamp("06/09/1900").is_err());
        assert!(RANGE.clamp("").is_err());
        for bad in ["1789-7-4", "+1789-07-04", "1789-07-4", "01789-07-04", "1789-07-04T00:00"] {
            assert!(matches!(RANGE.clamp(bad), Err(AppError::BadRequest(_))), "{bad}");
        }
    }

    #[test]
    fn years() {
        assert_eq!(year_range(1669, 1754).unwrap(), (1669, 1754));
        assert_eq!(year_range(1700, 1700).unwrap(), (1700, 1700));
        assert!(year_range(1754, 1669).is_err());
    }
}
