use chrono::NaiveDate;
use macropanel_core::{Frequency, RawSeries};

/// Monthly index closes as exported by a charting tool: Unix seconds at the
/// last trading day's close.
pub fn spx() -> RawSeries {
    let mut s = RawSeries::new("close", Frequency::Monthly);
    for (y, m, d, close) in [
        (2019, 1, 31, 2704.1),
        (2019, 2, 28, 2784.5),
        (2019, 3, 29, 2834.4),
        (2019, 4, 30, 2945.8),
        (2019, 5, 31, 2752.1),
        (2019, 6, 28, 2941.8),
        (2019, 7, 31, 2980.4),
        (2019, 8, 30, 2926.5),
        (2019, 9, 30, 2976.7),
        (2019, 10, 31, 3037.6),
        (2019, 11, 29, 3141.0),
        (2019, 12, 31, 3230.8),
        (2020, 1, 31, 3225.5),
        (2020, 2, 28, 2954.2),
        (2020, 3, 31, 2584.6),
        (2020, 4, 30, 2912.4),
        (2020, 5, 29, 3044.3),
        (2020, 6, 30, 3100.3),
    ] {
        if let Some(ts) = close_ts(y, m, d) {
            s.push(ts, Some(close));
        }
    }
    s
}

// 16:00 New York, 21:00 UTC outside daylight saving.
fn close_ts(year: i32, month: u32, day: u32) -> Option<i64> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(21, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}
