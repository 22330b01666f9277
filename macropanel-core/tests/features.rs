use macropanel_core::{
    CanonicalDate, Feature, Frequency, PanelError, TimeSeries, annualized, derive_feature, diff,
    pct_change,
};

fn cd(y: i32, m: u32) -> CanonicalDate {
    CanonicalDate::new(y, m).unwrap()
}

fn close(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-12)
}

fn cpi() -> TimeSeries {
    // Eight months with March missing entirely.
    let values = [
        (1, Some(100.0)),
        (2, Some(101.0)),
        (4, Some(103.0)),
        (5, None),
        (6, Some(105.0)),
        (7, Some(106.0)),
        (8, Some(0.0)),
        (9, Some(108.0)),
    ];
    TimeSeries::from_pairs("Raw", Frequency::Monthly, values.map(|(m, v)| (cd(2020, m), v))).unwrap()
}

#[test]
fn monthly_pct_change_uses_calendar_lag() {
    let pct = pct_change(&cpi(), 1).unwrap();
    assert_eq!(pct.name(), "Pct");
    assert_eq!(pct.len(), cpi().len());
    assert_eq!(pct.value_at(cd(2020, 1)), None);
    assert!(close(pct.value_at(cd(2020, 2)), 0.01));
    // March is absent, so April has no base even though it follows February positionally.
    assert_eq!(pct.value_at(cd(2020, 4)), None);
    // Null current and null base both give null.
    assert_eq!(pct.value_at(cd(2020, 5)), None);
    assert_eq!(pct.value_at(cd(2020, 6)), None);
    // Zero base gives null.
    assert_eq!(pct.value_at(cd(2020, 9)), None);
}

#[test]
fn six_month_change_and_annualized_rate() {
    let six = pct_change(&cpi(), 6).unwrap();
    assert_eq!(six.name(), "6m_pct_change");
    assert!(close(six.value_at(cd(2020, 7)), 0.06));

    let ann = annualized(&cpi(), 6).unwrap();
    assert_eq!(ann.name(), "annualized_change");
    assert!(close(ann.value_at(cd(2020, 7)), 0.12));

    let quarter = annualized(&cpi(), 3).unwrap();
    assert_eq!(quarter.name(), "3m_annualized_change");
}

#[test]
fn absolute_diff() {
    let d = diff(&cpi(), 3).unwrap();
    assert_eq!(d.name(), "3m_change");
    assert!(close(d.value_at(cd(2020, 4)), 3.0));
    assert!(close(d.value_at(cd(2020, 7)), 3.0));
}

#[test]
fn zero_lag_is_invalid() {
    assert!(matches!(
        derive_feature(&cpi(), Feature::PctChange { months: 0 }),
        Err(PanelError::InvalidArg(_))
    ));
}

#[test]
fn quarterly_input_is_rejected() {
    let q = TimeSeries::from_pairs("GDP", Frequency::Quarterly, [(cd(2020, 1), Some(1.0))]).unwrap();
    assert!(matches!(
        derive_feature(&q, Feature::Diff { months: 1 }),
        Err(PanelError::FrequencyMismatch { .. })
    ));
}
