pub mod cpi;
pub mod employment;
pub mod gdp;
pub mod market;

use macropanel_core::{Frequency, RawSeries};

pub fn by_key(key: &str) -> Option<RawSeries> {
    match key {
        "pcpi" => Some(cpi::headline()),
        "pcpix" => Some(cpi::core()),
        "gdp" => Some(gdp::real_output()),
        "employment" => Some(employment::payrolls()),
        "spx" => Some(market::spx()),
        "MALFORMED" => Some(malformed()),
        _ => None,
    }
}

/// Monthly label rows as published by the real-time dataset: `YYYY:MM`.
pub(crate) fn monthly_labels(
    name: &str,
    start_year: i32,
    values: &[Option<f64>],
) -> RawSeries {
    let mut s = RawSeries::new(name, Frequency::Monthly);
    let mut year = start_year;
    let mut month = 1u32;
    for v in values {
        s.push(format!("{year}:{month:02}"), *v);
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    s
}

// One unparseable quarter label in an otherwise valid series.
fn malformed() -> RawSeries {
    let mut s = RawSeries::new("GDP", Frequency::Quarterly);
    s.push("2019:Q4", Some(1.0));
    s.push("2020:Q5", Some(2.0));
    s
}
