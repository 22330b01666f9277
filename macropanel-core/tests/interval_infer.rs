use macropanel_core::{
    CanonicalDate, Frequency, PanelError, TimeSeries, estimate_step_months, infer_frequency,
    verify_frequency,
};
use proptest::prelude::*;

fn cd(y: i32, m: u32) -> CanonicalDate {
    CanonicalDate::new(y, m).unwrap()
}

fn series(freq: Frequency, months: &[i64]) -> TimeSeries {
    let base = cd(2000, 1);
    TimeSeries::from_pairs(
        "x",
        freq,
        months.iter().map(|&k| (base.add_months(k).unwrap(), Some(1.0))),
    )
    .unwrap()
}

#[test]
fn too_few_dates() {
    assert_eq!(estimate_step_months(&[]), None);
    assert_eq!(estimate_step_months(&[cd(2020, 1), cd(2020, 1)]), None);
}

#[test]
fn order_and_duplicates_do_not_matter() {
    let dates = [cd(2020, 7), cd(2020, 1), cd(2020, 4), cd(2020, 4)];
    assert_eq!(estimate_step_months(&dates), Some(3));
}

#[test]
fn infers_monthly_and_quarterly() {
    assert_eq!(
        infer_frequency(&series(Frequency::Monthly, &[0, 1, 2, 3, 5])),
        Some(Frequency::Monthly)
    );
    assert_eq!(
        infer_frequency(&series(Frequency::Quarterly, &[0, 3, 6, 12])),
        Some(Frequency::Quarterly)
    );
    assert_eq!(infer_frequency(&series(Frequency::Monthly, &[0, 12, 24])), None);
}

#[test]
fn verify_flags_contradiction_only() {
    let mislabelled = series(Frequency::Quarterly, &[0, 1, 2, 3]);
    assert_eq!(
        verify_frequency(&mislabelled).unwrap_err(),
        PanelError::FrequencyMismatch {
            series: "x".into(),
            expected: Frequency::Quarterly,
            found: Frequency::Monthly,
        }
    );
    assert!(verify_frequency(&series(Frequency::Monthly, &[0, 1, 2])).is_ok());
    // Annual cadence cannot be classified, so it passes.
    assert!(verify_frequency(&series(Frequency::Quarterly, &[0, 12])).is_ok());
    assert!(verify_frequency(&series(Frequency::Quarterly, &[0])).is_ok());
}

proptest! {
    #[test]
    fn regular_grid_recovers_step(step in 1i64..24, n in 2usize..50, offset in 0i64..12) {
        let base = cd(1990, 1);
        let dates: Vec<_> = (0..n as i64).map(|i| base.add_months(offset + i * step).unwrap()).collect();
        prop_assert_eq!(estimate_step_months(&dates), Some(step));
    }
}
