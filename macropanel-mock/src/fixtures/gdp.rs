use macropanel_core::{Frequency, RawSeries};

pub fn real_output() -> RawSeries {
    let mut s = RawSeries::new("GDP", Frequency::Quarterly);
    for (label, v) in [
        ("2019:Q2", 19_021.9),
        ("2019:Q3", 19_121.1),
        ("2019:Q4", 19_222.0),
        ("2020:Q1", 18_951.9),
        ("2020:Q2", 17_258.2),
    ] {
        s.push(label, Some(v));
    }
    s
}
