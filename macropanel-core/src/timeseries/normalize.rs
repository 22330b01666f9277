use chrono::{DateTime, NaiveDate};

use crate::{CanonicalDate, Observation, PanelError, RawDate, RawSeries, TimeSeries};

const SEPARATORS: [char; 3] = [':', '-', '/'];

/// Map a raw date to its canonical first-of-month key.
///
/// Accepted encodings:
/// - quarter labels `YYYY:Qn` (also `YYYY-Qn`): month = `(n - 1) * 3 + 1`;
/// - month labels `YYYY:Mmm`, `YYYY:mm`, `YYYY-mm`, `YYYY/mm`;
/// - full dates `YYYY-MM-DD` and `MM/DD/YYYY`, truncated to day 1;
/// - Unix timestamps (seconds, UTC), truncated to day 1;
/// - parsed calendar dates, truncated to day 1.
///
/// Already-canonical input comes back unchanged.
///
/// # Errors
/// Returns `PanelError::MalformedDate` carrying the raw text when no encoding
/// matches or the month, quarter, or year is out of range.
///
/// ```
/// use macropanel_core::{normalize_date, CanonicalDate, RawDate};
/// let q3 = normalize_date(&RawDate::from("2020:Q3")).unwrap();
/// assert_eq!(q3, CanonicalDate::new(2020, 7).unwrap());
/// // 2020-01-31T21:00:00Z, an end-of-month close
/// let close = normalize_date(&RawDate::Timestamp(1_580_504_400)).unwrap();
/// assert_eq!(close.to_string(), "2020-01-01");
/// ```
pub fn normalize_date(raw: &RawDate) -> Result<CanonicalDate, PanelError> {
    let out = match raw {
        RawDate::Text(s) => parse_text(s),
        RawDate::Timestamp(ts) => DateTime::from_timestamp(*ts, 0)
            .ok_or_else(|| PanelError::malformed_date(raw.to_string(), "timestamp out of range"))
            .and_then(|dt| CanonicalDate::from_date(dt.date_naive())),
        RawDate::Date(d) => CanonicalDate::from_date(*d),
    };
    out.map_err(|e| with_raw(e, raw))
}

/// Normalize every row of a raw series and validate the result.
///
/// Rows are sorted by canonical date. Two rows landing on the same month are an
/// error, never an overwrite.
///
/// # Errors
/// - `PanelError::InSeries` wrapping `MalformedDate` for the first bad date.
/// - `PanelError::DuplicateDate` if two rows collapse to one key.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "macropanel_core::normalize_series",
        skip(raw),
        fields(series = %raw.name, rows = raw.points.len()),
    )
)]
pub fn normalize_series(raw: RawSeries) -> Result<TimeSeries, PanelError> {
    let RawSeries {
        name,
        frequency,
        points,
    } = raw;

    let mut out: Vec<Observation> = Vec::with_capacity(points.len());
    for (date, value) in points {
        let date = normalize_date(&date).map_err(|e| e.in_series(name.as_str()))?;
        out.push(Observation { date, value });
    }
    // Stable: equal keys keep file order so the collision check below sees both rows.
    out.sort_by_key(|p| p.date);

    TimeSeries::new(name, frequency, out)
}

fn with_raw(err: PanelError, raw: &RawDate) -> PanelError {
    match err {
        PanelError::MalformedDate { reason, .. } => PanelError::MalformedDate {
            raw: raw.to_string(),
            reason,
        },
        other => other,
    }
}

fn parse_text(s: &str) -> Result<CanonicalDate, PanelError> {
    let t = s.trim();
    let Some(sep) = t.chars().find(|c| SEPARATORS.contains(c)) else {
        return Err(PanelError::malformed_date(s, "no date separator"));
    };
    let parts: Vec<&str> = t.split(sep).collect();
    match (parts.as_slice(), sep) {
        ([_, _, _], '-') => parse_full(t, "%Y-%m-%d"),
        ([_, _, _], '/') => parse_full(t, "%m/%d/%Y"),
        ([year, period], _) => parse_period(s, year, period),
        _ => Err(PanelError::malformed_date(s, "unrecognized date encoding")),
    }
}

fn parse_full(t: &str, fmt: &str) -> Result<CanonicalDate, PanelError> {
    let d = NaiveDate::parse_from_str(t, fmt)
        .map_err(|e| PanelError::malformed_date(t, e.to_string()))?;
    CanonicalDate::from_date(d)
}

fn parse_period(raw: &str, year: &str, period: &str) -> Result<CanonicalDate, PanelError> {
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PanelError::malformed_date(raw, "year must be four digits"));
    }
    let year: i32 = year
        .parse()
        .map_err(|_| PanelError::malformed_date(raw, "bad year"))?;

    if let Some(q) = period.strip_prefix(['Q', 'q']) {
        let q: u32 = parse_digits(raw, q, "quarter")?;
        if !(1..=4).contains(&q) {
            return Err(PanelError::malformed_date(
                raw,
                format!("quarter {q} outside 1..=4"),
            ));
        }
        return CanonicalDate::new(year, (q - 1) * 3 + 1);
    }

    let month = period.strip_prefix(['M', 'm']).unwrap_or(period);
    let month: u32 = parse_digits(raw, month, "month")?;
    CanonicalDate::new(year, month)
}

fn parse_digits(raw: &str, digits: &str, what: &str) -> Result<u32, PanelError> {
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PanelError::malformed_date(raw, format!("bad {what} {digits:?}")));
    }
    digits
        .parse()
        .map_err(|_| PanelError::malformed_date(raw, format!("bad {what} {digits:?}")))
}
