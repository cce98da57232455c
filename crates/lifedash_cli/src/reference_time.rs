use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Parses `--now` as RFC 3339, a naive local timestamp, or a bare date
/// (midnight).
///
/// RFC 3339 input keeps the wall-clock time of its own offset.
pub fn parse_reference_time(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.naive_local());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(parsed);
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(parsed.and_time(NaiveTime::default()));
    }
    Err(format!(
        "invalid reference time `{raw}`; expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD"
    ))
}

/// Local wall-clock time, read once per invocation.
pub fn wall_clock() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::parse_reference_time;
    use chrono::NaiveDate;

    #[test]
    fn parses_bare_date_is_midnight() {
        let parsed = parse_reference_time("2026-10-19").expect("bare date parses");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 10, 19)
                .expect("valid test date")
                .and_hms_opt(0, 0, 0)
                .expect("valid test time")
        );
    }

    #[test]
    fn parses_rfc3339_keeps_local_wall_time() {
        let parsed = parse_reference_time("2026-10-19T08:30:00+02:00").expect("rfc3339 parses");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 10, 19)
                .expect("valid test date")
                .and_hms_opt(8, 30, 0)
                .expect("valid test time")
        );
    }

    #[test]
    fn parses_naive_timestamp() {
        let parsed = parse_reference_time("2026-10-19T12:00:00").expect("naive timestamp parses");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 10, 19)
                .expect("valid test date")
                .and_hms_opt(12, 0, 0)
                .expect("valid test time")
        );
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_reference_time("tomorrow").expect_err("garbage must fail");
        assert!(err.contains("invalid reference time"));
    }
}
