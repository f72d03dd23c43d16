use chrono::NaiveDate;

use crate::error::GatewayError;

/// Widest inclusive date range the NEO endpoint accepts, in days between
/// the two bounds.
pub const NEO_MAX_RANGE_DAYS: i64 = 7;

pub const LIMIT_MIN: i64 = 1;
pub const LIMIT_MAX: i64 = 100;

pub const NEO_DEFAULT_LIMIT: i64 = 10;
pub const MARS_DEFAULT_LIMIT: i64 = 20;
pub const MARS_DEFAULT_SOL: i64 = 1000;
pub const MARS_DEFAULT_ROVER: &str = "curiosity";

/// First date with EPIC imagery available.
pub fn epic_min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 6, 13).expect("valid calendar date")
}

/// Validate a YYYY-MM-DD date string.
pub fn validate_date(input: &str) -> Result<NaiveDate, GatewayError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        GatewayError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2025-09-01)",
            trimmed
        ))
    })
}

/// Validate a result limit: must parse as an integer in 1..=100. `None`
/// falls back to the endpoint's default.
pub fn validate_limit(input: Option<&str>, default: i64) -> Result<i64, GatewayError> {
    let limit = match input {
        None => return Ok(default),
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
            GatewayError::InvalidInput(format!("invalid limit '{}'. Expected an integer", raw))
        })?,
    };
    if !(LIMIT_MIN..=LIMIT_MAX).contains(&limit) {
        return Err(GatewayError::InvalidInput(format!(
            "limit must be between {} and {}, got {}",
            LIMIT_MIN, LIMIT_MAX, limit
        )));
    }
    Ok(limit)
}

/// Validate a Martian sol: must parse as a non-negative integer. `None`
/// falls back to the default sol.
pub fn validate_sol(input: Option<&str>) -> Result<i64, GatewayError> {
    let sol = match input {
        None => return Ok(MARS_DEFAULT_SOL),
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
            GatewayError::InvalidInput(format!("invalid sol '{}'. Expected an integer", raw))
        })?,
    };
    if sol < 0 {
        return Err(GatewayError::InvalidInput(format!(
            "sol must be >= 0, got {}",
            sol
        )));
    }
    Ok(sol)
}

/// Validate the NEO date range: end on or after start, and no wider than
/// [`NEO_MAX_RANGE_DAYS`]. Must pass before any upstream call is made.
pub fn validate_neo_range(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), GatewayError> {
    if end_date < start_date {
        return Err(GatewayError::InvalidRange(
            "end_date must be on or after start_date".to_string(),
        ));
    }
    let span = (end_date - start_date).num_days();
    if span > NEO_MAX_RANGE_DAYS {
        return Err(GatewayError::InvalidRange(format!(
            "date range spans {} days; the maximum is {}",
            span, NEO_MAX_RANGE_DAYS
        )));
    }
    Ok(())
}

/// Validate an EPIC imagery date against the earliest available date.
pub fn validate_epic_date(date: NaiveDate) -> Result<(), GatewayError> {
    if date < epic_min_date() {
        return Err(GatewayError::InvalidRange(format!(
            "no imagery before {}; got {}",
            epic_min_date().format("%Y-%m-%d"),
            date.format("%Y-%m-%d")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- Date validation --

    #[test]
    fn date_valid() {
        assert_eq!(validate_date("2025-09-01").unwrap(), date(2025, 9, 1));
    }

    #[test]
    fn date_with_whitespace() {
        assert_eq!(validate_date("  2025-01-15  ").unwrap(), date(2025, 1, 15));
    }

    #[test]
    fn date_invalid_format() {
        assert!(validate_date("09/01/2025").is_err());
        assert!(validate_date("not-a-date").is_err());
    }

    #[test]
    fn date_invalid_values() {
        assert!(validate_date("2025-13-01").is_err());
        assert!(validate_date("2025-02-30").is_err());
    }

    #[test]
    fn date_empty() {
        assert!(validate_date("").is_err());
        assert!(validate_date("   ").is_err());
    }

    // -- Limit bounds --

    #[test]
    fn limit_default_applied() {
        assert_eq!(validate_limit(None, NEO_DEFAULT_LIMIT).unwrap(), 10);
        assert_eq!(validate_limit(None, MARS_DEFAULT_LIMIT).unwrap(), 20);
    }

    #[test]
    fn limit_valid_bounds() {
        assert_eq!(validate_limit(Some("1"), 10).unwrap(), 1);
        assert_eq!(validate_limit(Some("100"), 10).unwrap(), 100);
    }

    #[test]
    fn limit_zero_rejected() {
        assert!(validate_limit(Some("0"), 10).is_err());
    }

    #[test]
    fn limit_over_max_rejected() {
        assert!(validate_limit(Some("101"), 10).is_err());
    }

    #[test]
    fn limit_negative_rejected() {
        assert!(validate_limit(Some("-5"), 10).is_err());
    }

    #[test]
    fn limit_non_numeric_rejected() {
        assert!(validate_limit(Some("ten"), 10).is_err());
        assert!(validate_limit(Some("1.5"), 10).is_err());
    }

    // -- Sol --

    #[test]
    fn sol_default_applied() {
        assert_eq!(validate_sol(None).unwrap(), MARS_DEFAULT_SOL);
    }

    #[test]
    fn sol_valid() {
        assert_eq!(validate_sol(Some("0")).unwrap(), 0);
        assert_eq!(validate_sol(Some("1000")).unwrap(), 1000);
    }

    #[test]
    fn sol_negative_rejected() {
        assert!(validate_sol(Some("-1")).is_err());
    }

    #[test]
    fn sol_non_numeric_rejected() {
        assert!(validate_sol(Some("many")).is_err());
    }

    // -- NEO range rules --

    #[test]
    fn neo_range_single_day() {
        assert!(validate_neo_range(date(2025, 9, 1), date(2025, 9, 1)).is_ok());
    }

    #[test]
    fn neo_range_six_days() {
        assert!(validate_neo_range(date(2025, 9, 1), date(2025, 9, 7)).is_ok());
    }

    #[test]
    fn neo_range_exactly_seven_days() {
        assert!(validate_neo_range(date(2025, 9, 1), date(2025, 9, 8)).is_ok());
    }

    #[test]
    fn neo_range_nine_days_rejected() {
        let err = validate_neo_range(date(2025, 9, 1), date(2025, 9, 10)).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRange(_)));
    }

    #[test]
    fn neo_range_reversed_rejected() {
        let err = validate_neo_range(date(2025, 9, 10), date(2025, 9, 1)).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRange(_)));
    }

    // -- EPIC minimum date --

    #[test]
    fn epic_date_on_minimum() {
        assert!(validate_epic_date(date(2015, 6, 13)).is_ok());
    }

    #[test]
    fn epic_date_after_minimum() {
        assert!(validate_epic_date(date(2020, 1, 1)).is_ok());
    }

    #[test]
    fn epic_date_before_minimum_rejected() {
        let err = validate_epic_date(date(2015, 6, 12)).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRange(_)));
    }
}
